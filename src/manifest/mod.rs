//! Dependency manifest parsing and rule selection.
//!
//! A manifest (conventionally `other-requirements.txt`) lists one package per
//! line, optionally gated by profile selectors and constrained by version.
//!
//! # Modules
//!
//! - [`parser`] - Line grammar and [`parse_manifest`]
//! - [`rule`] - [`Rule`] and [`Selector`] types
//!
//! # Example
//!
//! ```
//! use bindep::manifest::Depends;
//! use bindep::profiles::ProfileSet;
//!
//! let depends = Depends::parse("foo\nbar [something]\n").unwrap();
//! let profiles = ProfileSet::resolve(Vec::<String>::new(), Vec::<String>::new());
//! let active = depends.active_rules(&profiles);
//! assert_eq!(active.len(), 1);
//! assert_eq!(active[0].package, "foo");
//! ```

pub mod parser;
pub mod rule;

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use crate::error::{BindepError, Result};
use crate::profiles::ProfileSet;

pub use parser::{parse_line, parse_manifest};
pub use rule::{Rule, Selector};

/// Default manifest file name, looked up in the current directory.
pub const DEFAULT_MANIFEST: &str = "other-requirements.txt";

/// A parsed manifest. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Depends {
    rules: Vec<Rule>,
    profiles: BTreeSet<String>,
}

impl Depends {
    /// Parse manifest text.
    pub fn parse(text: &str) -> Result<Self> {
        let rules = parse_manifest(text)?;
        let profiles = rules
            .iter()
            .flat_map(|rule| rule.selectors.iter().map(|s| s.profile.clone()))
            .collect();
        tracing::debug!("Parsed {} manifest rules", rules.len());
        Ok(Self { rules, profiles })
    }

    /// Read and parse a manifest file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(BindepError::ManifestNotFound {
                    path: path.to_path_buf(),
                })
            }
            Err(e) => return Err(e.into()),
        };
        tracing::debug!("Loaded manifest from {}", path.display());
        Self::parse(&text)
    }

    /// Read and parse `file` relative to `root`.
    ///
    /// A missing file is reported under `file` as given, not the joined path.
    pub fn load_in(root: &Path, file: &Path) -> Result<Self> {
        match Self::load(&root.join(file)) {
            Err(BindepError::ManifestNotFound { .. }) => Err(BindepError::ManifestNotFound {
                path: file.to_path_buf(),
            }),
            other => other,
        }
    }

    /// All rules in manifest order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Every profile name referenced by any selector, sorted.
    ///
    /// This is the discovery list, not the active set.
    pub fn profiles(&self) -> impl Iterator<Item = &str> {
        self.profiles.iter().map(String::as_str)
    }

    /// Rules whose selectors all hold for `profiles`, in manifest order.
    pub fn active_rules(&self, profiles: &ProfileSet) -> Vec<&Rule> {
        self.rules
            .iter()
            .filter(|rule| rule.is_active(profiles))
            .collect()
    }
}
