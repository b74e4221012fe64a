//! Integration tests for the bindep binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn setup_project(manifest: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("other-requirements.txt"), manifest).unwrap();
    temp
}

fn bindep(dir: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("bindep"));
    cmd.current_dir(dir.path());
    cmd.env("NO_COLOR", "1");
    cmd.env_remove("BINDEP_FILE");
    cmd.env_remove("BINDEP_FORMAT");
    cmd
}

/// Every rule is gated on a profile no test activates, so no package
/// manager is ever queried.
const GATED_MANIFEST: &str = "\
# native dependencies
libffi-dev [never-enabled]
postgresql-client [mysql !sqlite] <8.5,!=8.4.3
";

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    bindep(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("dependency manifest"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    bindep(&temp)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_missing_manifest_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    bindep(&temp)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("No other-requirements.txt file found."));
    Ok(())
}

#[test]
fn cli_missing_custom_manifest_names_it_as_given() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    bindep(&temp)
        .args(["--file", "deps/bin.txt"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("No deps/bin.txt file found."));
    Ok(())
}

#[test]
fn cli_operator_glued_to_package_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project("foo<=1\n");
    bindep(&temp)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Parse error on line 1"))
        .stdout(predicate::str::contains("Missing packages").not());
    Ok(())
}

#[test]
fn cli_empty_manifest_succeeds() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project("");
    bindep(&temp).assert().success();
    Ok(())
}

#[test]
fn cli_inactive_rules_are_not_checked() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(GATED_MANIFEST);
    bindep(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("Missing packages").not());
    Ok(())
}

#[test]
fn cli_lists_profiles() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(GATED_MANIFEST);
    bindep(&temp)
        .arg("--profiles")
        .assert()
        .success()
        .stdout(predicate::str::contains("Platform profiles:"))
        .stdout(predicate::str::contains("Configuration profiles:"))
        .stdout(predicate::str::contains("mysql"))
        .stdout(predicate::str::contains("never-enabled"))
        .stdout(predicate::str::contains("sqlite"));
    Ok(())
}

#[test]
fn cli_lists_profiles_as_json() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project("foo [test]\n");
    let output = bindep(&temp)
        .args(["--profiles", "--format", "json"])
        .output()?;
    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(parsed["configuration"][0], "test");
    assert!(parsed["platform"].is_array());
    Ok(())
}

#[test]
fn cli_parse_error_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project("foo\nbar <\n");
    bindep(&temp)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Parse error on line 2"));
    Ok(())
}

#[test]
fn cli_unbalanced_selector_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project("foo [bar\n");
    bindep(&temp)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("unbalanced"));
    Ok(())
}

#[test]
fn cli_accepts_file_flag() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join("bindep.txt"), "foo [never-enabled]\n")?;
    bindep(&temp)
        .args(["--file", "bindep.txt"])
        .assert()
        .success();
    Ok(())
}

#[test]
fn cli_reads_file_from_env() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join("deps.txt"), "foo [x]\n")?;
    bindep(&temp)
        .env("BINDEP_FILE", "deps.txt")
        .arg("--profiles")
        .assert()
        .success()
        .stdout(predicate::str::contains("x"));
    Ok(())
}

#[test]
fn cli_json_check_of_empty_manifest() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project("");
    let output = bindep(&temp).args(["--format", "json"]).output()?;
    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(parsed["ok"], true);
    Ok(())
}

#[test]
fn cli_rejects_unknown_flag() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    bindep(&temp)
        .arg("--frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--frobnicate"));
    Ok(())
}
