//! Check report formatters.
//!
//! This module provides formatters for writing check results in different
//! formats (human-readable, JSON).

pub mod human;
pub mod json;

use crate::requirements::CheckError;
use std::io::Write;

/// Output format for check results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

/// Trait for formatting check output.
pub trait ReportFormatter {
    /// Format check errors to the given writer.
    fn format<W: Write>(&self, errors: &[CheckError], writer: &mut W) -> std::io::Result<()>;
}

/// Format errors with the formatter for `format` into a string.
pub fn render(format: OutputFormat, errors: &[CheckError]) -> std::io::Result<String> {
    let mut output = Vec::new();
    match format {
        OutputFormat::Human => HumanFormatter::new().format(errors, &mut output)?,
        OutputFormat::Json => JsonFormatter::new().format(errors, &mut output)?,
    }
    Ok(String::from_utf8_lossy(&output).into_owned())
}

pub use human::HumanFormatter;
pub use json::JsonFormatter;
