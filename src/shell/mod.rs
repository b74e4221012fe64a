//! Subprocess execution for package-manager queries.

pub mod command;
pub mod mock;

pub use command::{display_command, CommandResult, CommandRunner, SystemRunner};
pub use mock::ScriptedRunner;
