//! RPM package database queries.

use crate::error::{BindepError, Result};
use crate::shell::{display_command, CommandRunner, SystemRunner};

use super::detection::PackageFormat;
use super::dpkg::failure_message;
use super::Platform;

const QUERY_FORMAT: &str = "%{NAME} %|EPOCH?{%{EPOCH}:}|%{VERSION}-%{RELEASE}\n";

/// Platform backed by `rpm -q`.
#[derive(Debug)]
pub struct Rpm<R = SystemRunner> {
    distro: String,
    runner: R,
}

impl<R: CommandRunner> Rpm<R> {
    pub fn with_runner(distro: impl Into<String>, runner: R) -> Self {
        Self {
            distro: distro.into(),
            runner,
        }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }
}

impl<R: CommandRunner> Platform for Rpm<R> {
    fn get_pkg_version(&self, name: &str) -> Result<Option<String>> {
        let args = ["--qf", QUERY_FORMAT, "-q", name];
        let command = display_command("rpm", &args);
        let result = self
            .runner
            .run("rpm", &args)
            .map_err(|e| BindepError::PlatformQuery {
                command: command.clone(),
                message: e.to_string(),
            })?;

        let output = result.combined_output();
        if output.contains("is not installed") {
            return Ok(None);
        }
        if !result.success {
            return Err(BindepError::PlatformQuery {
                command,
                message: failure_message(output.trim(), result.exit_code),
            });
        }

        // Multilib hosts print one line per architecture.
        result
            .stdout
            .lines()
            .find_map(|line| {
                let mut fields = line.split_whitespace();
                fields.next()?;
                fields.next().map(str::to_string)
            })
            .map(Some)
            .ok_or_else(|| BindepError::PlatformQuery {
                command,
                message: format!("unexpected output '{}'", result.stdout.trim()),
            })
    }

    fn platform_profiles(&self) -> Vec<String> {
        vec![
            format!("platform:{}", self.distro),
            PackageFormat::Rpm.profile().to_string(),
        ]
    }
}
