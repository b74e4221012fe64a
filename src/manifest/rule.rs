//! Rule types produced by the manifest parser.

use crate::profiles::ProfileSet;
use crate::version::VersionConstraint;

/// A profile reference gating a rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Selector {
    /// `true` requires the profile to be active, `false` requires it absent.
    pub positive: bool,
    pub profile: String,
}

impl Selector {
    pub fn include(profile: impl Into<String>) -> Self {
        Self {
            positive: true,
            profile: profile.into(),
        }
    }

    pub fn exclude(profile: impl Into<String>) -> Self {
        Self {
            positive: false,
            profile: profile.into(),
        }
    }

    /// Whether this selector holds for the given active profiles.
    pub fn holds(&self, profiles: &ProfileSet) -> bool {
        self.positive == profiles.contains(&self.profile)
    }
}

/// One manifest line: a package with optional selectors and constraints.
///
/// Selectors and constraints keep manifest order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub package: String,
    pub selectors: Vec<Selector>,
    pub constraints: Vec<VersionConstraint>,
}

impl Rule {
    /// A rule with no selectors and no constraints.
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            selectors: Vec::new(),
            constraints: Vec::new(),
        }
    }

    pub fn with_selectors(mut self, selectors: Vec<Selector>) -> Self {
        self.selectors = selectors;
        self
    }

    pub fn with_constraints(mut self, constraints: Vec<VersionConstraint>) -> Self {
        self.constraints = constraints;
        self
    }

    /// A rule is active when every one of its selectors holds.
    pub fn is_active(&self, profiles: &ProfileSet) -> bool {
        self.selectors.iter().all(|s| s.holds(profiles))
    }
}
