//! Check command implementation.
//!
//! The default `bindep [PROFILE...]` invocation checks the active rules of
//! the manifest against installed packages.

use std::path::{Path, PathBuf};

use crate::error::{BindepError, Result};
use crate::manifest::Depends;
use crate::platform::Platform;
use crate::profiles::ProfileSet;
use crate::report::{render, OutputFormat};
use crate::requirements::RuleChecker;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand<'a> {
    root: PathBuf,
    file: PathBuf,
    platform: &'a dyn Platform,
    profiles: Vec<String>,
    format: OutputFormat,
}

impl<'a> CheckCommand<'a> {
    /// Create a new check command.
    pub fn new(
        root: &Path,
        file: &Path,
        platform: &'a dyn Platform,
        profiles: Vec<String>,
        format: OutputFormat,
    ) -> Self {
        Self {
            root: root.to_path_buf(),
            file: file.to_path_buf(),
            platform,
            profiles,
            format,
        }
    }
}

impl Command for CheckCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let depends = match Depends::load_in(&self.root, &self.file) {
            Ok(depends) => depends,
            Err(e @ BindepError::ManifestNotFound { .. }) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(1));
            }
            Err(e) => return Err(e),
        };

        let platform_profiles = self.platform.platform_profiles();
        if platform_profiles.is_empty() && self.format == OutputFormat::Human {
            ui.warning("Host platform not detected, no platform profiles are active");
        }
        let profiles = ProfileSet::resolve(self.profiles.iter().cloned(), platform_profiles);
        tracing::debug!(
            "Active profiles: {}",
            profiles.iter().collect::<Vec<_>>().join(", ")
        );

        let rules = depends.active_rules(&profiles);
        tracing::debug!("{} of {} rules active", rules.len(), depends.rules().len());

        let errors = RuleChecker::new(self.platform).check_rules(rules)?;
        let output = render(self.format, &errors)?;

        match self.format {
            OutputFormat::Human => {
                for line in output.lines() {
                    ui.message(line);
                }
                if errors.is_empty() {
                    ui.success("All required packages are installed");
                }
            }
            OutputFormat::Json => ui.message(output.trim_end()),
        }

        if errors.is_empty() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}
