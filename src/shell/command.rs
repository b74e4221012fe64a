//! Subprocess execution.
//!
//! Package-manager queries run programs directly (no shell) with captured
//! output. The [`CommandRunner`] trait is the seam platform backends use,
//! so tests can substitute canned output.

use crate::error::{BindepError, Result};
use std::process::{Command, Stdio};

/// Result of executing a command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: String, stderr: String) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: Option<i32>, stdout: String, stderr: String) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            success: false,
        }
    }

    /// Stdout followed by stderr, for commands that report on either stream.
    pub fn combined_output(&self) -> String {
        let mut out = self.stdout.clone();
        out.push_str(&self.stderr);
        out
    }
}

/// Runs a program with arguments and captures its output.
pub trait CommandRunner {
    /// Run `program` with `args`.
    ///
    /// A non-zero exit is a successful call returning a failed
    /// [`CommandResult`]. Only a failure to spawn is an error.
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandResult>;
}

/// Runs commands on the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandResult> {
        tracing::debug!("Running {}", display_command(program, args));

        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|_| BindepError::CommandFailed {
                command: display_command(program, args),
                code: None,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        if output.status.success() {
            Ok(CommandResult::success(stdout, stderr))
        } else {
            Ok(CommandResult::failure(output.status.code(), stdout, stderr))
        }
    }
}

/// Render a program and its arguments for messages.
pub fn display_command(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}
