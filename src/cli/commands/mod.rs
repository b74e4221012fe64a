//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! - [`check`] - Check active rules against installed packages (default)
//! - [`profiles`] - List platform and configuration profiles (`--profiles`)

pub mod check;
pub mod dispatcher;
pub mod profiles;

pub use check::CheckCommand;
pub use dispatcher::{Command, CommandDispatcher, CommandResult};
pub use profiles::ProfilesCommand;
