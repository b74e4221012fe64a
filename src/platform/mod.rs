//! Host platform: installed-package lookup and platform profiles.
//!
//! The backend is chosen once at startup from the detected distribution and
//! passed to the checker as a [`Platform`] trait object.
//!
//! # Modules
//!
//! - [`detection`] - Distribution detection and package-format mapping
//! - [`dpkg`] - `dpkg-query` backend
//! - [`rpm`] - `rpm -q` backend
//! - [`mock`] - In-memory platform for tests

pub mod detection;
pub mod dpkg;
pub mod mock;
pub mod rpm;

use std::fs;

use crate::error::{BindepError, Result};
use crate::shell::{CommandRunner, SystemRunner};

pub use detection::{detect_distro, PackageFormat};
pub use dpkg::Dpkg;
pub use mock::StaticPlatform;
pub use rpm::Rpm;

const OS_RELEASE: &str = "/etc/os-release";

/// Installed-package state of the host.
pub trait Platform {
    /// Installed version of `name`, or `None` when it is not installed.
    ///
    /// Unknown packages are not installed; only unexpected package-manager
    /// failures are errors.
    fn get_pkg_version(&self, name: &str) -> Result<Option<String>>;

    /// Profiles implied by the host (e.g. `platform:ubuntu`, `platform:dpkg`).
    fn platform_profiles(&self) -> Vec<String>;
}

/// A host with no known package backend.
///
/// Profiles are still reported so manifests can be inspected, but every
/// version lookup fails.
#[derive(Debug, Clone, Default)]
pub struct Unsupported {
    distro: Option<String>,
}

impl Unsupported {
    pub fn new(distro: Option<String>) -> Self {
        Self { distro }
    }
}

impl Platform for Unsupported {
    fn get_pkg_version(&self, _name: &str) -> Result<Option<String>> {
        Err(BindepError::UnsupportedPlatform {
            distro: self.distro.clone().unwrap_or_else(|| "unknown".to_string()),
        })
    }

    fn platform_profiles(&self) -> Vec<String> {
        self.distro
            .iter()
            .map(|d| format!("platform:{}", d))
            .collect()
    }
}

/// Detect the host platform using real commands and `/etc/os-release`.
pub fn detect() -> Box<dyn Platform> {
    detect_with(SystemRunner, || fs::read_to_string(OS_RELEASE).ok())
}

/// Detect the host platform with a custom runner and os-release source.
pub fn detect_with<R, F>(runner: R, read_os_release: F) -> Box<dyn Platform>
where
    R: CommandRunner + 'static,
    F: FnOnce() -> Option<String>,
{
    let Some(distro) = detect_distro(&runner, read_os_release) else {
        tracing::warn!("Could not detect the host distribution");
        return Box::new(Unsupported::new(None));
    };

    tracing::debug!("Detected distribution '{}'", distro);
    match PackageFormat::for_distro(&distro) {
        Some(PackageFormat::Dpkg) => Box::new(Dpkg::with_runner(distro, runner)),
        Some(PackageFormat::Rpm) => Box::new(Rpm::with_runner(distro, runner)),
        None => {
            tracing::warn!("No package backend for distribution '{}'", distro);
            Box::new(Unsupported::new(Some(distro)))
        }
    }
}
