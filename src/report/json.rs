//! JSON output formatter.
//!
//! Formats check results as machine-readable JSON for tooling integration.

use super::ReportFormatter;
use crate::requirements::{CheckError, CheckReport};
use serde::Serialize;
use std::io::Write;

/// Formats check output as JSON.
#[derive(Debug, Default)]
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput {
    ok: bool,
    #[serde(flatten)]
    report: CheckReport,
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self
    }
}

impl ReportFormatter for JsonFormatter {
    fn format<W: Write>(&self, errors: &[CheckError], writer: &mut W) -> std::io::Result<()> {
        let report = CheckReport::from(errors.to_vec());
        let output = JsonOutput {
            ok: report.is_ok(),
            report,
        };

        serde_json::to_writer_pretty(&mut *writer, &output).map_err(std::io::Error::other)?;
        writeln!(writer)
    }
}
