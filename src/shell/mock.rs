//! Scripted command runner for testing.
//!
//! `ScriptedRunner` implements [`CommandRunner`] by returning pre-registered
//! results keyed on the full command line, and records every invocation.
//!
//! # Example
//!
//! ```
//! use bindep::shell::{CommandRunner, ScriptedRunner};
//!
//! let runner = ScriptedRunner::new();
//! runner.succeed("lsb_release -si", "Ubuntu\n");
//!
//! let result = runner.run("lsb_release", &["-si"]).unwrap();
//! assert_eq!(result.stdout, "Ubuntu\n");
//! assert_eq!(runner.calls(), vec!["lsb_release -si".to_string()]);
//! ```

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::{BindepError, Result};

use super::command::{display_command, CommandResult, CommandRunner};

/// Command runner that replays canned results.
///
/// Unregistered commands behave like a program that is not installed.
#[derive(Debug, Default)]
pub struct ScriptedRunner {
    results: RefCell<HashMap<String, CommandResult>>,
    calls: RefCell<Vec<String>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a zero-exit result with the given stdout.
    pub fn succeed(&self, command: &str, stdout: &str) {
        self.results.borrow_mut().insert(
            command.to_string(),
            CommandResult::success(stdout.to_string(), String::new()),
        );
    }

    /// Register a failing result with the given exit code and output.
    pub fn fail(&self, command: &str, code: i32, stdout: &str, stderr: &str) {
        self.results.borrow_mut().insert(
            command.to_string(),
            CommandResult::failure(Some(code), stdout.to_string(), stderr.to_string()),
        );
    }

    /// Every command line run so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandResult> {
        let command = display_command(program, args);
        self.calls.borrow_mut().push(command.clone());
        self.results
            .borrow()
            .get(&command)
            .cloned()
            .ok_or(BindepError::CommandFailed {
                command,
                code: None,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unregistered_command_fails_to_spawn() {
        let runner = ScriptedRunner::new();
        let err = runner.run("rpm", &["-q", "foo"]).unwrap_err();
        assert!(matches!(err, BindepError::CommandFailed { code: None, .. }));
        assert_eq!(runner.calls(), vec!["rpm -q foo".to_string()]);
    }

    #[test]
    fn failing_result_keeps_exit_code() {
        let runner = ScriptedRunner::new();
        runner.fail("dpkg-query -W foo", 1, "", "no packages found\n");
        let result = runner.run("dpkg-query", &["-W", "foo"]).unwrap();
        assert!(!result.success);
        assert_eq!(result.exit_code, Some(1));
        assert_eq!(result.stderr, "no packages found\n");
    }
}
