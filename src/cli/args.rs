//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::Parser;
use std::path::PathBuf;

use crate::manifest::DEFAULT_MANIFEST;
use crate::report::OutputFormat;

/// bindep - Check installed binary packages against a dependency manifest.
#[derive(Debug, Parser)]
#[command(name = "bindep")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration profiles to activate (default: "default")
    #[arg(value_name = "PROFILE")]
    pub profiles: Vec<String>,

    /// List the platform and configuration profiles
    #[arg(long = "profiles")]
    pub list_profiles: bool,

    /// Path to the manifest file
    #[arg(short, long, env = "BINDEP_FILE", default_value = DEFAULT_MANIFEST)]
    pub file: PathBuf,

    /// Output format
    #[arg(long, value_enum, env = "BINDEP_FORMAT", default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    /// Minimal output
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}
