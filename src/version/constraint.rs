//! Relational operators and version constraints.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::compare::compare_versions;

/// A relational operator in a version constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Operator {
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = "<=")]
    Le,
    #[serde(rename = "==")]
    Eq,
    #[serde(rename = "!=")]
    Ne,
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = ">=")]
    Ge,
}

impl Operator {
    pub const ALL: [Operator; 6] = [
        Operator::Le,
        Operator::Ne,
        Operator::Eq,
        Operator::Ge,
        Operator::Lt,
        Operator::Gt,
    ];

    /// The manifest token for this operator.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Lt => "<",
            Operator::Le => "<=",
            Operator::Eq => "==",
            Operator::Ne => "!=",
            Operator::Gt => ">",
            Operator::Ge => ">=",
        }
    }

    /// Whether a three-way comparison result satisfies this operator.
    pub fn accepts(&self, ordering: Ordering) -> bool {
        match self {
            Operator::Lt => ordering == Ordering::Less,
            Operator::Le => ordering != Ordering::Greater,
            Operator::Eq => ordering == Ordering::Equal,
            Operator::Ne => ordering != Ordering::Equal,
            Operator::Gt => ordering == Ordering::Greater,
            Operator::Ge => ordering != Ordering::Less,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|op| op.as_str() == s)
            .copied()
            .ok_or_else(|| format!("unknown operator '{}'", s))
    }
}

/// Evaluate `a <op> b` under Debian version ordering.
pub fn eval(a: &str, op: Operator, b: &str) -> bool {
    op.accepts(compare_versions(a, b))
}

/// An operator paired with the version it compares against.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct VersionConstraint {
    pub operator: Operator,
    pub version: String,
}

impl VersionConstraint {
    pub fn new(operator: Operator, version: impl Into<String>) -> Self {
        Self {
            operator,
            version: version.into(),
        }
    }

    /// Whether an installed version satisfies this constraint.
    pub fn is_satisfied_by(&self, installed: &str) -> bool {
        eval(installed, self.operator, &self.version)
    }
}

impl fmt::Display for VersionConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.operator, self.version)
    }
}
