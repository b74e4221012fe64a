//! Checking active rules against installed packages.
//!
//! # Modules
//!
//! - [`checker`] - [`RuleChecker`] queries the platform and evaluates constraints
//! - [`status`] - [`CheckError`] and [`CheckReport`] result types

pub mod checker;
pub mod status;

pub use checker::RuleChecker;
pub use status::{BadVersionEntry, CheckError, CheckReport};
