//! Error types for bindep operations.
//!
//! This module defines [`BindepError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Parse and platform-query failures are fatal and abort the whole check
//! - Missing packages and bad versions are report values, not errors
//!   (see [`crate::requirements::CheckError`])
//! - Use `anyhow::Error` (via `BindepError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for bindep operations.
#[derive(Debug, Error)]
pub enum BindepError {
    /// Manifest file not found at the expected location.
    #[error("No {} file found.", path.display())]
    ManifestNotFound { path: PathBuf },

    /// Malformed manifest syntax.
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    /// The package manager was invoked but failed in an unexpected way.
    #[error("Package query '{command}' failed: {message}")]
    PlatformQuery { command: String, message: String },

    /// No package backend is known for the detected distribution.
    #[error("Unsupported platform '{distro}': cannot query installed packages")]
    UnsupportedPlatform { distro: String },

    /// A subprocess could not be spawned.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for bindep operations.
pub type Result<T> = std::result::Result<T, BindepError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_not_found_displays_path() {
        let err = BindepError::ManifestNotFound {
            path: PathBuf::from("other-requirements.txt"),
        };
        assert_eq!(err.to_string(), "No other-requirements.txt file found.");
    }

    #[test]
    fn parse_error_displays_line_and_message() {
        let err = BindepError::Parse {
            line: 3,
            message: "unknown operator '=~'".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("line 3"));
        assert!(msg.contains("=~"));
    }

    #[test]
    fn platform_query_displays_command_and_message() {
        let err = BindepError::PlatformQuery {
            command: "dpkg-query -W foo".into(),
            message: "permission denied".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("dpkg-query -W foo"));
        assert!(msg.contains("permission denied"));
    }

    #[test]
    fn unsupported_platform_displays_distro() {
        let err = BindepError::UnsupportedPlatform {
            distro: "plan9".into(),
        };
        assert!(err.to_string().contains("plan9"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: BindepError = io_err.into();
        assert!(matches!(err, BindepError::Io(_)));
    }
}
