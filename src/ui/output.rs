//! Output mode.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show report lines and status messages.
    #[default]
    Normal,
    /// Show report lines and errors only.
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows success and warning messages.
    pub fn shows_status(&self) -> bool {
        matches!(self, Self::Normal)
    }
}
