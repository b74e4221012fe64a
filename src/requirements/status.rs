//! Check result types.
//!
//! Missing packages and unsatisfied constraints are report values returned
//! from a check, not errors. Each kind appears at most once per check and
//! aggregates every offending package.

use serde::Serialize;

/// One installed package whose version fails a constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BadVersionEntry {
    pub package: String,
    /// The failing constraint as written, e.g. `<2`.
    pub constraint: String,
    pub installed: String,
}

impl BadVersionEntry {
    pub fn new(
        package: impl Into<String>,
        constraint: impl Into<String>,
        installed: impl Into<String>,
    ) -> Self {
        Self {
            package: package.into(),
            constraint: constraint.into(),
            installed: installed.into(),
        }
    }
}

/// A category of rule violation found by a check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckError {
    /// Packages that are not installed, in first-encountered order.
    Missing { packages: Vec<String> },

    /// Installed packages whose versions fail their constraints.
    BadVersion { entries: Vec<BadVersionEntry> },
}

/// Aggregated outcome of checking a set of rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub missing: Vec<String>,
    pub bad_versions: Vec<BadVersionEntry>,
}

impl CheckReport {
    /// Whether every rule was satisfied.
    pub fn is_ok(&self) -> bool {
        self.missing.is_empty() && self.bad_versions.is_empty()
    }

    /// Record a missing package once.
    pub fn add_missing(&mut self, package: &str) {
        if !self.missing.iter().any(|p| p == package) {
            self.missing.push(package.to_string());
        }
    }

    pub fn add_bad_version(&mut self, entry: BadVersionEntry) {
        self.bad_versions.push(entry);
    }

    /// The report as errors: `Missing` first, then `BadVersion`, each only
    /// when non-empty.
    pub fn into_errors(self) -> Vec<CheckError> {
        let mut errors = Vec::new();
        if !self.missing.is_empty() {
            errors.push(CheckError::Missing {
                packages: self.missing,
            });
        }
        if !self.bad_versions.is_empty() {
            errors.push(CheckError::BadVersion {
                entries: self.bad_versions,
            });
        }
        errors
    }
}

impl From<Vec<CheckError>> for CheckReport {
    fn from(errors: Vec<CheckError>) -> Self {
        let mut report = CheckReport::default();
        for error in errors {
            match error {
                CheckError::Missing { packages } => report.missing.extend(packages),
                CheckError::BadVersion { entries } => report.bad_versions.extend(entries),
            }
        }
        report
    }
}
