//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI invocations

use std::path::{Path, PathBuf};

use crate::cli::args::Cli;
use crate::error::Result;
use crate::platform::Platform;
use crate::ui::UserInterface;

use super::check::CheckCommand;
use super::profiles::ProfilesCommand;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI invocations to their implementations.
///
/// The platform is detected once by the caller and shared by every command.
pub struct CommandDispatcher {
    project_root: PathBuf,
    platform: Box<dyn Platform>,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root and platform.
    pub fn new(project_root: PathBuf, platform: Box<dyn Platform>) -> Self {
        Self {
            project_root,
            platform,
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Dispatch and execute the command selected by `cli`.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let root = self.project_root.as_path();
        if cli.list_profiles {
            ProfilesCommand::new(root, &cli.file, &*self.platform, cli.format).execute(ui)
        } else {
            CheckCommand::new(
                root,
                &cli.file,
                &*self.platform,
                cli.profiles.clone(),
                cli.format,
            )
            .execute(ui)
        }
    }
}
