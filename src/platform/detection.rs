//! Distribution detection.
//!
//! Asks `lsb_release -si` first and falls back to the `ID=` field of
//! `/etc/os-release` on hosts without LSB tools.

use crate::shell::CommandRunner;

/// Native package format of a distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageFormat {
    Dpkg,
    Rpm,
}

impl PackageFormat {
    /// Profile name implied by this package format.
    pub fn profile(&self) -> &'static str {
        match self {
            PackageFormat::Dpkg => "platform:dpkg",
            PackageFormat::Rpm => "platform:rpm",
        }
    }

    /// Package format used by a (normalized) distribution id.
    pub fn for_distro(distro: &str) -> Option<Self> {
        match distro {
            "ubuntu" | "debian" | "linuxmint" | "raspbian" | "pop" => Some(PackageFormat::Dpkg),
            "centos" | "fedora" | "redhat" | "rhel" | "redhatenterpriseserver" | "rocky"
            | "almalinux" => Some(PackageFormat::Rpm),
            d if d.starts_with("opensuse") || d.starts_with("suse") => Some(PackageFormat::Rpm),
            _ => None,
        }
    }
}

/// Lowercase a distribution id and make it usable as a profile name.
pub fn normalize_distro(raw: &str) -> Option<String> {
    let name = raw
        .trim()
        .trim_matches('"')
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase();
    (!name.is_empty()).then_some(name)
}

/// Distribution id reported by `lsb_release -si`.
pub fn distro_from_lsb<R: CommandRunner>(runner: &R) -> Option<String> {
    match runner.run("lsb_release", &["-si"]) {
        Ok(result) if result.success => normalize_distro(&result.stdout),
        Ok(result) => {
            tracing::debug!("lsb_release exited with {:?}", result.exit_code);
            None
        }
        Err(e) => {
            tracing::debug!("lsb_release unavailable: {}", e);
            None
        }
    }
}

/// Distribution id from the contents of an os-release file.
pub fn distro_from_os_release(text: &str) -> Option<String> {
    text.lines()
        .filter_map(|line| line.trim().strip_prefix("ID="))
        .find_map(normalize_distro)
}

/// Detect the running distribution.
pub fn detect_distro<R, F>(runner: &R, read_os_release: F) -> Option<String>
where
    R: CommandRunner,
    F: FnOnce() -> Option<String>,
{
    distro_from_lsb(runner).or_else(|| {
        let distro = read_os_release().and_then(|text| distro_from_os_release(&text));
        if distro.is_some() {
            tracing::warn!("lsb_release unavailable, using os-release for platform detection");
        }
        distro
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::ScriptedRunner;

    #[test]
    fn lsb_output_is_normalized() {
        let runner = ScriptedRunner::new();
        runner.succeed("lsb_release -si", "Ubuntu\n");
        assert_eq!(distro_from_lsb(&runner), Some("ubuntu".to_string()));
    }

    #[test]
    fn multi_word_ids_become_single_tokens() {
        assert_eq!(
            normalize_distro("openSUSE project\n"),
            Some("opensuse-project".to_string())
        );
        assert_eq!(normalize_distro("  \n"), None);
    }

    #[test]
    fn os_release_id_is_parsed() {
        let text = "NAME=\"Fedora Linux\"\nID=fedora\nVERSION_ID=39\n";
        assert_eq!(distro_from_os_release(text), Some("fedora".to_string()));
        assert_eq!(distro_from_os_release("ID=\"rhel\"\n"), Some("rhel".to_string()));
        assert_eq!(distro_from_os_release("ID_LIKE=debian\n"), None);
    }

    #[test]
    fn falls_back_to_os_release() {
        let runner = ScriptedRunner::new();
        let distro = detect_distro(&runner, || Some("ID=debian\n".to_string()));
        assert_eq!(distro, Some("debian".to_string()));
    }

    #[test]
    fn lsb_wins_over_os_release() {
        let runner = ScriptedRunner::new();
        runner.succeed("lsb_release -si", "CentOS\n");
        let distro = detect_distro(&runner, || Some("ID=debian\n".to_string()));
        assert_eq!(distro, Some("centos".to_string()));
    }

    #[test]
    fn nothing_detected() {
        let runner = ScriptedRunner::new();
        runner.fail("lsb_release -si", 1, "", "");
        assert_eq!(detect_distro(&runner, || None), None);
    }

    #[test]
    fn distros_map_to_package_formats() {
        assert_eq!(PackageFormat::for_distro("ubuntu"), Some(PackageFormat::Dpkg));
        assert_eq!(PackageFormat::for_distro("fedora"), Some(PackageFormat::Rpm));
        assert_eq!(PackageFormat::for_distro("opensuse-leap"), Some(PackageFormat::Rpm));
        assert_eq!(PackageFormat::for_distro("arch"), None);
        assert_eq!(PackageFormat::Dpkg.profile(), "platform:dpkg");
    }
}
