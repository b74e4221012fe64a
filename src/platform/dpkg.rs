//! Debian package database queries.

use crate::error::{BindepError, Result};
use crate::shell::{display_command, CommandRunner, SystemRunner};

use super::detection::PackageFormat;
use super::Platform;

const QUERY_FORMAT: &str = "${binary:Package} ${Status} ${Version}\n";

/// Platform backed by `dpkg-query`.
#[derive(Debug)]
pub struct Dpkg<R = SystemRunner> {
    distro: String,
    runner: R,
}

impl<R: CommandRunner> Dpkg<R> {
    pub fn with_runner(distro: impl Into<String>, runner: R) -> Self {
        Self {
            distro: distro.into(),
            runner,
        }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }
}

impl<R: CommandRunner> Platform for Dpkg<R> {
    fn get_pkg_version(&self, name: &str) -> Result<Option<String>> {
        let args = ["-W", "-f", QUERY_FORMAT, name];
        let command = display_command("dpkg-query", &args);
        let result = self
            .runner
            .run("dpkg-query", &args)
            .map_err(|e| BindepError::PlatformQuery {
                command: command.clone(),
                message: e.to_string(),
            })?;

        if !result.success {
            let output = result.combined_output();
            if output.contains("no packages found matching") {
                return Ok(None);
            }
            return Err(BindepError::PlatformQuery {
                command,
                message: failure_message(output.trim(), result.exit_code),
            });
        }

        parse_status(&result.stdout).map_err(|message| BindepError::PlatformQuery {
            command,
            message,
        })
    }

    fn platform_profiles(&self) -> Vec<String> {
        vec![
            format!("platform:{}", self.distro),
            PackageFormat::Dpkg.profile().to_string(),
        ]
    }
}

/// Extract the installed version from `dpkg-query` status lines.
///
/// Each line reads `<package> <want> <flag> <status> <version>`; only the
/// `installed` status counts (e.g. `config-files` means removed).
fn parse_status(stdout: &str) -> std::result::Result<Option<String>, String> {
    let mut saw_line = false;
    for line in stdout.lines().filter(|l| !l.trim().is_empty()) {
        saw_line = true;
        let fields: Vec<&str> = line.split_whitespace().collect();
        match fields.as_slice() {
            [_, _, _, "installed", version, ..] => return Ok(Some(version.to_string())),
            [_, _, _, _, ..] => continue,
            _ => return Err(format!("unexpected output '{}'", line.trim())),
        }
    }
    if saw_line {
        Ok(None)
    } else {
        Err("no output".to_string())
    }
}

pub(super) fn failure_message(output: &str, code: Option<i32>) -> String {
    if output.is_empty() {
        format!("exited with code {:?}", code)
    } else {
        output.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::ScriptedRunner;

    const COMMAND: &str = "dpkg-query -W -f ${binary:Package} ${Status} ${Version}\n foo";

    fn platform() -> Dpkg<ScriptedRunner> {
        Dpkg::with_runner("ubuntu", ScriptedRunner::new())
    }

    #[test]
    fn not_installed() {
        let dpkg = platform();
        dpkg.runner()
            .succeed(COMMAND, "foo deinstall ok config-files 4.0.0-0ubuntu1\n");
        assert_eq!(dpkg.get_pkg_version("foo").unwrap(), None);
    }

    #[test]
    fn unknown_package() {
        let dpkg = platform();
        dpkg.runner()
            .fail(COMMAND, 1, "", "dpkg-query: no packages found matching foo\n");
        assert_eq!(dpkg.get_pkg_version("foo").unwrap(), None);
    }

    #[test]
    fn installed_version() {
        let dpkg = platform();
        dpkg.runner()
            .succeed(COMMAND, "foo install ok installed 4.0.0-0ubuntu1\n");
        assert_eq!(
            dpkg.get_pkg_version("foo").unwrap(),
            Some("4.0.0-0ubuntu1".to_string())
        );
        assert_eq!(dpkg.runner().calls(), vec![COMMAND.to_string()]);
    }

    #[test]
    fn first_installed_architecture_wins() {
        let dpkg = platform();
        dpkg.runner().succeed(
            COMMAND,
            "foo:i386 deinstall ok config-files 1.0\nfoo:amd64 install ok installed 2.0\n",
        );
        assert_eq!(dpkg.get_pkg_version("foo").unwrap(), Some("2.0".to_string()));
    }

    #[test]
    fn unexpected_failure_is_fatal() {
        let dpkg = platform();
        dpkg.runner().fail(COMMAND, 2, "", "dpkg-query: error: database locked\n");
        let err = dpkg.get_pkg_version("foo").unwrap_err();
        assert!(matches!(err, BindepError::PlatformQuery { .. }));
        assert!(err.to_string().contains("database locked"));
    }

    #[test]
    fn missing_dpkg_query_is_fatal() {
        let dpkg = platform();
        let err = dpkg.get_pkg_version("foo").unwrap_err();
        assert!(matches!(err, BindepError::PlatformQuery { .. }));
    }

    #[test]
    fn garbled_output_is_fatal() {
        assert!(parse_status("foo\n").is_err());
        assert!(parse_status("").is_err());
    }

    #[test]
    fn profiles_include_distro_and_format() {
        assert_eq!(
            platform().platform_profiles(),
            vec!["platform:ubuntu".to_string(), "platform:dpkg".to_string()]
        );
    }
}
