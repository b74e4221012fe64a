//! In-memory platform for testing.
//!
//! # Example
//!
//! ```
//! use bindep::platform::{Platform, StaticPlatform};
//!
//! let platform = StaticPlatform::new()
//!     .with_profile("platform:dpkg")
//!     .with_package("foo", "1.2-3");
//!
//! assert_eq!(platform.get_pkg_version("foo").unwrap(), Some("1.2-3".to_string()));
//! assert_eq!(platform.get_pkg_version("bar").unwrap(), None);
//! assert_eq!(platform.queries(), vec!["foo".to_string(), "bar".to_string()]);
//! ```

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use crate::error::{BindepError, Result};

use super::Platform;

/// Platform with a fixed package table that records every query.
#[derive(Debug, Default)]
pub struct StaticPlatform {
    profiles: Vec<String>,
    installed: HashMap<String, String>,
    failing: HashSet<String>,
    queries: RefCell<Vec<String>>,
}

impl StaticPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profiles.push(profile.into());
        self
    }

    pub fn with_package(mut self, name: impl Into<String>, version: impl Into<String>) -> Self {
        self.installed.insert(name.into(), version.into());
        self
    }

    /// Make queries for `name` fail like a broken package manager.
    pub fn with_failure(mut self, name: impl Into<String>) -> Self {
        self.failing.insert(name.into());
        self
    }

    /// Package names queried so far, in order.
    pub fn queries(&self) -> Vec<String> {
        self.queries.borrow().clone()
    }
}

impl Platform for StaticPlatform {
    fn get_pkg_version(&self, name: &str) -> Result<Option<String>> {
        self.queries.borrow_mut().push(name.to_string());
        if self.failing.contains(name) {
            return Err(BindepError::PlatformQuery {
                command: format!("query {}", name),
                message: "package database unavailable".to_string(),
            });
        }
        Ok(self.installed.get(name).cloned())
    }

    fn platform_profiles(&self) -> Vec<String> {
        self.profiles.clone()
    }
}
