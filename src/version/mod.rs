//! Debian-style version comparison.
//!
//! - [`compare`] - Three-way ordering of version strings
//! - [`constraint`] - Relational operators and constraint evaluation

pub mod compare;
pub mod constraint;

pub use compare::{compare_versions, DebianVersion};
pub use constraint::{eval, Operator, VersionConstraint};
