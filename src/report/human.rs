//! Human-readable output formatter.

use super::ReportFormatter;
use crate::requirements::CheckError;
use std::io::Write;

/// Formats check errors for terminal display.
#[derive(Debug, Default)]
pub struct HumanFormatter;

impl HumanFormatter {
    /// Create a new human formatter.
    pub fn new() -> Self {
        Self
    }
}

impl ReportFormatter for HumanFormatter {
    fn format<W: Write>(&self, errors: &[CheckError], writer: &mut W) -> std::io::Result<()> {
        for error in errors {
            match error {
                CheckError::Missing { packages } => {
                    writeln!(writer, "Missing packages:")?;
                    writeln!(writer, "    {}", packages.join(" "))?;
                }
                CheckError::BadVersion { entries } => {
                    writeln!(writer, "Bad versions of installed packages:")?;
                    for entry in entries {
                        writeln!(
                            writer,
                            "    {} version {} does not match {}",
                            entry.package, entry.installed, entry.constraint
                        )?;
                    }
                }
            }
        }
        Ok(())
    }
}
