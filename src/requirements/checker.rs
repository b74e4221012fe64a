//! Rule checker.
//!
//! The `RuleChecker` queries the platform for each rule's package and
//! evaluates its version constraints, caching installed versions within a
//! run so a package named by several rules is only queried once.

use std::collections::HashMap;

use crate::error::Result;
use crate::manifest::Rule;
use crate::platform::Platform;

use super::status::{BadVersionEntry, CheckError, CheckReport};

/// Checks rules against the installed packages of a platform.
pub struct RuleChecker<'a> {
    platform: &'a dyn Platform,
    cache: HashMap<String, Option<String>>,
}

impl<'a> RuleChecker<'a> {
    /// Create a new checker over `platform`.
    pub fn new(platform: &'a dyn Platform) -> Self {
        Self {
            platform,
            cache: HashMap::new(),
        }
    }

    /// Check rules in order, returning aggregated errors.
    ///
    /// `Missing` (if any) precedes `BadVersion` (if any). A platform query
    /// failure aborts the check.
    pub fn check_rules<'r, I>(&mut self, rules: I) -> Result<Vec<CheckError>>
    where
        I: IntoIterator<Item = &'r Rule>,
    {
        Ok(self.report(rules)?.into_errors())
    }

    /// Check rules in order, returning the aggregated report.
    pub fn report<'r, I>(&mut self, rules: I) -> Result<CheckReport>
    where
        I: IntoIterator<Item = &'r Rule>,
    {
        let mut report = CheckReport::default();
        for rule in rules {
            let Some(installed) = self.installed_version(&rule.package)? else {
                report.add_missing(&rule.package);
                continue;
            };
            for constraint in &rule.constraints {
                if !constraint.is_satisfied_by(&installed) {
                    report.add_bad_version(BadVersionEntry::new(
                        rule.package.as_str(),
                        constraint.to_string(),
                        installed.as_str(),
                    ));
                }
            }
        }
        Ok(report)
    }

    /// Installed version of a package, using the cache when available.
    pub fn installed_version(&mut self, package: &str) -> Result<Option<String>> {
        if let Some(cached) = self.cache.get(package) {
            tracing::debug!("Cache hit for package '{}'", package);
            return Ok(cached.clone());
        }

        let version = self.platform.get_pkg_version(package)?;
        tracing::debug!("Package '{}' installed version: {:?}", package, version);
        self.cache.insert(package.to_string(), version.clone());
        Ok(version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BindepError;
    use crate::platform::StaticPlatform;
    use crate::version::{Operator, VersionConstraint};

    #[test]
    fn check_rule_missing() {
        let platform = StaticPlatform::new();
        let mut checker = RuleChecker::new(&platform);
        let errors = checker.check_rules(&[Rule::new("foo")]).unwrap();
        assert_eq!(
            errors,
            vec![CheckError::Missing {
                packages: vec!["foo".into()]
            }]
        );
        assert_eq!(platform.queries(), vec!["foo".to_string()]);
    }

    #[test]
    fn check_rule_present() {
        let platform = StaticPlatform::new().with_package("foo", "123");
        let mut checker = RuleChecker::new(&platform);
        assert!(checker.check_rules(&[Rule::new("foo")]).unwrap().is_empty());
    }

    #[test]
    fn check_rule_incompatible() {
        let platform = StaticPlatform::new().with_package("foo", "123");
        let mut checker = RuleChecker::new(&platform);
        let rule =
            Rule::new("foo").with_constraints(vec![VersionConstraint::new(Operator::Ne, "123")]);
        assert_eq!(
            checker.check_rules(&[rule]).unwrap(),
            vec![CheckError::BadVersion {
                entries: vec![BadVersionEntry::new("foo", "!=123", "123")]
            }]
        );
    }

    #[test]
    fn every_failing_constraint_is_reported() {
        let platform = StaticPlatform::new().with_package("foo", "3");
        let mut checker = RuleChecker::new(&platform);
        let rule = Rule::new("foo").with_constraints(vec![
            VersionConstraint::new(Operator::Lt, "2"),
            VersionConstraint::new(Operator::Ge, "1"),
            VersionConstraint::new(Operator::Eq, "2"),
        ]);
        let report = checker.report(&[rule]).unwrap();
        assert_eq!(
            report.bad_versions,
            vec![
                BadVersionEntry::new("foo", "<2", "3"),
                BadVersionEntry::new("foo", "==2", "3"),
            ]
        );
    }

    #[test]
    fn errors_aggregate_across_rules() {
        let platform = StaticPlatform::new()
            .with_package("a", "1")
            .with_package("b", "5");
        let mut checker = RuleChecker::new(&platform);
        let rules = vec![
            Rule::new("x"),
            Rule::new("a").with_constraints(vec![VersionConstraint::new(Operator::Gt, "1")]),
            Rule::new("y"),
            Rule::new("b").with_constraints(vec![VersionConstraint::new(Operator::Lt, "5")]),
        ];
        let errors = checker.check_rules(&rules).unwrap();
        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors[0],
            CheckError::Missing {
                packages: vec!["x".into(), "y".into()]
            }
        );
        match &errors[1] {
            CheckError::BadVersion { entries } => assert_eq!(entries.len(), 2),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn repeated_packages_are_queried_once() {
        let platform = StaticPlatform::new();
        let mut checker = RuleChecker::new(&platform);
        let errors = checker
            .check_rules(&[Rule::new("foo"), Rule::new("foo")])
            .unwrap();
        assert_eq!(
            errors,
            vec![CheckError::Missing {
                packages: vec!["foo".into()]
            }]
        );
        assert_eq!(platform.queries().len(), 1);
    }

    #[test]
    fn platform_failure_aborts_check() {
        let platform = StaticPlatform::new().with_failure("bad");
        let mut checker = RuleChecker::new(&platform);
        let result = checker.check_rules(&[Rule::new("foo"), Rule::new("bad")]);
        assert!(matches!(result, Err(BindepError::PlatformQuery { .. })));
    }

    #[test]
    fn no_rules_no_errors() {
        let platform = StaticPlatform::new();
        let mut checker = RuleChecker::new(&platform);
        assert!(checker.check_rules(Vec::<&Rule>::new()).unwrap().is_empty());
        assert!(platform.queries().is_empty());
    }
}
