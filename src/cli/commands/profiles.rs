//! Profiles command implementation.
//!
//! `bindep --profiles` lists the platform profiles of the host and every
//! configuration profile the manifest references.

use std::path::{Path, PathBuf};

use serde_json::json;

use crate::error::{BindepError, Result};
use crate::manifest::Depends;
use crate::platform::Platform;
use crate::report::OutputFormat;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The profiles command implementation.
pub struct ProfilesCommand<'a> {
    root: PathBuf,
    file: PathBuf,
    platform: &'a dyn Platform,
    format: OutputFormat,
}

impl<'a> ProfilesCommand<'a> {
    /// Create a new profiles command.
    pub fn new(
        root: &Path,
        file: &Path,
        platform: &'a dyn Platform,
        format: OutputFormat,
    ) -> Self {
        Self {
            root: root.to_path_buf(),
            file: file.to_path_buf(),
            platform,
            format,
        }
    }
}

impl Command for ProfilesCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let depends = match Depends::load_in(&self.root, &self.file) {
            Ok(depends) => depends,
            Err(e @ BindepError::ManifestNotFound { .. }) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(1));
            }
            Err(e) => return Err(e),
        };

        let platform = self.platform.platform_profiles();
        let configuration: Vec<&str> = depends.profiles().collect();

        match self.format {
            OutputFormat::Human => {
                ui.message("Platform profiles:");
                for profile in &platform {
                    ui.message(profile);
                }
                ui.message("");
                ui.message("Configuration profiles:");
                for profile in &configuration {
                    ui.message(profile);
                }
            }
            OutputFormat::Json => {
                let output = json!({
                    "platform": platform,
                    "configuration": configuration,
                });
                ui.message(&serde_json::to_string_pretty(&output)?);
            }
        }

        Ok(CommandResult::success())
    }
}
