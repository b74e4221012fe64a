//! bindep - Check installed binary packages against a dependency manifest.
//!
//! bindep reads a declarative manifest of native (non-language-ecosystem)
//! packages, selects the rules active for the requested profiles and the
//! host platform, and reports missing packages and installed versions that
//! violate their constraints. It never installs anything.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`manifest`] - Manifest parsing and rule selection
//! - [`platform`] - Host detection and installed-package lookup
//! - [`profiles`] - Active profile sets
//! - [`report`] - Human and JSON report formatters
//! - [`requirements`] - Checking rules against installed packages
//! - [`shell`] - Subprocess execution
//! - [`ui`] - Terminal output
//! - [`version`] - Debian version comparison
//!
//! # Example
//!
//! ```
//! use bindep::manifest::Depends;
//! use bindep::platform::{Platform, StaticPlatform};
//! use bindep::profiles::ProfileSet;
//! use bindep::requirements::{BadVersionEntry, CheckError, RuleChecker};
//!
//! let depends = Depends::parse("foo <2\nbar [mysql]\n").unwrap();
//! let platform = StaticPlatform::new().with_package("foo", "3");
//!
//! let profiles = ProfileSet::resolve(Vec::<String>::new(), platform.platform_profiles());
//! let rules = depends.active_rules(&profiles);
//! let errors = RuleChecker::new(&platform).check_rules(rules).unwrap();
//!
//! assert_eq!(
//!     errors,
//!     vec![CheckError::BadVersion {
//!         entries: vec![BadVersionEntry::new("foo", "<2", "3")],
//!     }]
//! );
//! ```

pub mod cli;
pub mod error;
pub mod manifest;
pub mod platform;
pub mod profiles;
pub mod report;
pub mod requirements;
pub mod shell;
pub mod ui;
pub mod version;

pub use error::{BindepError, Result};
