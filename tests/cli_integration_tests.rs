//! Integration tests for the launcher binary
//!
//! Each test runs the built executable against fake launcher scripts in a
//! temporary directory, selected through `ADA_LAUNCHER_SCRIPT_DIR`.

#![cfg(unix)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::ffi::OsStr;
use std::fs;
use std::os::unix::ffi::OsStrExt;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use tempfile::TempDir;

const USAGE: &str = "Usage: ada-launcher [-p|--port <port>] [-h|--headless] [-t|--tool <listen|sca>] [-- <sca args>]";

/// Write an executable shell script that echoes its name and arguments
fn write_fake_script(dir: &Path, tool: &str, exit_code: i32) {
    let path = dir.join(format!("{}.sh", tool));
    let upper = tool.to_uppercase();
    fs::write(
        &path,
        format!("#!/bin/sh\necho \"FAKE_{} $# $*\"\nexit {}\n", upper, exit_code),
    )
    .unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
}

fn scripts(exit_code: i32) -> TempDir {
    let dir = TempDir::new().unwrap();
    write_fake_script(dir.path(), "listen", exit_code);
    write_fake_script(dir.path(), "sca", exit_code);
    dir
}

fn launcher(script_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("ada-launcher").unwrap();
    cmd.env("ADA_LAUNCHER_SCRIPT_DIR", script_dir)
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_default_listener() {
    let dir = scripts(0);

    launcher(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("ADA Scanner CLI Launcher"))
        .stdout(predicate::str::contains("Selected tool: listen"))
        .stdout(predicate::str::contains("Port override: (default)"))
        .stdout(predicate::str::contains("Headless: disabled"))
        .stdout(predicate::str::contains("FAKE_LISTEN 0 \n"));
}

#[test]
fn test_headless_listener_with_port() {
    let dir = scripts(0);

    launcher(dir.path())
        .args(["--tool", "listen", "--port", "4567", "--headless"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Port override: 4567"))
        .stdout(predicate::str::contains("Headless: enabled"))
        .stdout(predicate::str::contains("FAKE_LISTEN 3 --port 4567 --headless"));
}

#[test]
fn test_sca_passthrough_args() {
    let dir = scripts(0);

    launcher(dir.path())
        .args(["--tool", "sca", "--", "--config", "config.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Selected tool: sca"))
        .stdout(predicate::str::contains(
            "Static analysis args: --config config.json",
        ))
        .stdout(predicate::str::contains("FAKE_SCA 2 --config config.json"));
}

#[test]
fn test_sca_args_without_separator() {
    let dir = scripts(0);

    launcher(dir.path())
        .args(["-t", "sca", "--config", "config.json", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("FAKE_SCA 3 --config config.json --help"));
}

#[test]
fn test_sca_forwards_non_utf8_bytes_verbatim() {
    let dir = TempDir::new().unwrap();
    let received = dir.path().join("received.bin");
    let script = dir.path().join("sca.sh");
    fs::write(
        &script,
        format!("#!/bin/sh\nprintf '%s' \"$1\" > '{}'\n", received.display()),
    )
    .unwrap();
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

    let name = OsStr::from_bytes(b"caf\xe9.json");
    launcher(dir.path())
        .args([OsStr::new("--tool"), OsStr::new("sca"), name])
        .assert()
        .success()
        .stdout(predicate::str::contains("Static analysis args: caf\u{FFFD}.json"));

    assert_eq!(fs::read(&received).unwrap(), b"caf\xe9.json");
}

#[test]
fn test_sca_warns_on_headless() {
    let dir = scripts(0);

    launcher(dir.path())
        .args(["--headless", "--tool", "sca"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Static analysis args: (none)"))
        .stdout(predicate::str::contains("FAKE_SCA 0 \n"))
        .stderr(predicate::str::contains(
            "Warning: --port/--headless ignored for sca.",
        ));
}

#[test]
fn test_help_prints_usage_and_skips_scripts() {
    let dir = scripts(0);

    launcher(dir.path())
        .args(["--port", "80", "--help"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains(USAGE))
        .stdout(predicate::str::contains("FAKE_").not())
        .stdout(predicate::str::contains("Selected tool").not());
}

#[test]
fn test_invalid_port() {
    let dir = scripts(0);

    launcher(dir.path())
        .args(["--port", "nope"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Port must be a number."))
        .stderr(predicate::str::contains(USAGE))
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_unknown_option() {
    let dir = scripts(0);

    launcher(dir.path())
        .args(["--headless", "--bogus"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown option: --bogus"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_invalid_tool() {
    let dir = scripts(0);

    launcher(dir.path())
        .args(["--tool", "nope"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "Unknown tool: nope (expected listen or sca).",
        ));
}

#[test]
fn test_missing_tool_value() {
    let dir = scripts(0);

    launcher(dir.path())
        .arg("-t")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Missing value for -t."));
}

#[test]
fn test_script_exit_code_is_propagated() {
    let dir = scripts(7);

    launcher(dir.path())
        .args(["--tool", "sca"])
        .assert()
        .code(7)
        .stdout(predicate::str::contains("FAKE_SCA"));
}

#[test]
fn test_missing_script_fails() {
    let dir = TempDir::new().unwrap();

    launcher(dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Selected tool: listen"))
        .stderr(predicate::str::contains("listen.sh"));
}
