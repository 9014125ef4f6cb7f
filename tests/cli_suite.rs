use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use tempfile::TempDir;

// Helper function to initialize the command to test.
fn setup_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_webrelay-setup"))
}

// Preflight resolves tools on PATH, so tests pin PATH to a staged toolchain
// dir instead of trusting whatever the CI image ships.
fn toolchain(tools: &[&str]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for tool in tools {
        stub_tool(&dir, tool, "#!/bin/sh\nexit 0\n");
    }
    dir
}

fn stub_tool(dir: &TempDir, name: &str, script: &str) {
    let path = dir.path().join(name);
    fs::write(&path, script).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
}

fn full_toolchain() -> TempDir {
    toolchain(&["curl", "tar", "systemctl"])
}

fn with_path<'a>(cmd: &'a mut Command, dir: &Path) -> &'a mut Command {
    cmd.env("PATH", dir)
}

#[test]
fn help_describes_the_installer() {
    setup_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("WebRelay proxy agent"))
        .stdout(predicate::str::contains("--api-key"))
        .stdout(predicate::str::contains("--callback-url"));
}

#[test]
fn version_flag_reports_crate_version() {
    let expected = format!("webrelay-setup {}", env!("CARGO_PKG_VERSION"));
    setup_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(expected));
}

#[test]
fn missing_tool_aborts_in_preflight() {
    let tools = toolchain(&["curl", "tar"]); // no systemctl
    let mut cmd = setup_cmd();
    with_path(&mut cmd, tools.path())
        .args(["--api-key=ABC", "--callback-url=https://x/y"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Stage 'preflight' failed"))
        .stderr(predicate::str::contains("systemctl"));
}

#[test]
fn missing_api_key_fails_with_usage_before_any_mutation() {
    let tools = full_toolchain();
    let mut cmd = setup_cmd();
    with_path(&mut cmd, tools.path())
        .arg("--callback-url=https://x/y")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage: webrelay-setup"))
        .stderr(predicate::str::contains("--api-key is required"));
}

#[test]
fn missing_callback_url_fails_with_usage() {
    let tools = full_toolchain();
    let mut cmd = setup_cmd();
    with_path(&mut cmd, tools.path())
        .arg("--api-key=ABC")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--callback-url is required"));
}

#[test]
fn non_http_callback_url_is_rejected() {
    let tools = full_toolchain();
    let mut cmd = setup_cmd();
    with_path(&mut cmd, tools.path())
        .args(["--api-key=ABC", "--callback-url=not-a-url"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("http(s) URL"));
}

#[test]
fn validation_failure_names_the_arguments_stage() {
    let tools = full_toolchain();
    let mut cmd = setup_cmd();
    with_path(&mut cmd, tools.path())
        .arg("--api-key=ABC")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Stage 'arguments' failed"));
}

#[test]
fn unknown_tokens_are_ignored() {
    // Unknown flags must not trip the parser; with no required parameters the
    // run still stops at the validation gate, not at a clap error.
    let tools = full_toolchain();
    let mut cmd = setup_cmd();
    with_path(&mut cmd, tools.path())
        .args(["--panel-build=42", "--some-future-flag"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--api-key is required"));
}

#[test]
fn pipeline_stops_without_an_acceptable_runtime() {
    // Identity lookups report "already exists" so that stage skips every
    // mutation; with no python on PATH the locator is the next hard gate.
    let tools = full_toolchain();
    stub_tool(&tools, "getent", "#!/bin/sh\nexit 0\n");
    stub_tool(&tools, "id", "#!/bin/sh\necho webrelay\n");

    let mut cmd = setup_cmd();
    with_path(&mut cmd, tools.path())
        .args(["--api-key=ABC", "--callback-url=https://x/y"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("already exists"))
        .stderr(predicate::str::contains("Stage 'runtime' failed"))
        .stderr(predicate::str::contains("No acceptable Python runtime"));
}
