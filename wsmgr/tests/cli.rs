//! End-to-end runs of the `wsmgr` binary against a stand-in message tool.
#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A message tool that reports three workspaces and accepts every command,
/// appending it to `commands.log`.
fn fake_tool(dir: &Path) -> PathBuf {
    let script = format!(
        r#"#!/bin/sh
if [ "$1" = "-t" ]; then
  echo '[{{"id":1,"num":1,"name":"1","focused":false}},{{"id":2,"num":3,"name":"3: mail","focused":true}},{{"id":3,"num":7,"name":"7"}}]'
  exit 0
fi
printf '%s\n' "$1" >> '{log}'
echo '[{{"success":true}}]'
"#,
        log = dir.join("commands.log").display()
    );
    let path = dir.join("fake-i3-msg");
    fs::write(&path, script).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

fn wsmgr(config: &Path) -> Command {
    let mut cmd = Command::cargo_bin("wsmgr").unwrap();
    cmd.env("WSMGR_CONFIG_HOME", config)
        .env_remove("RUST_LOG")
        .env("WSMGR_LOG_OUTPUT", "console");
    cmd
}

fn logged_commands(dir: &Path) -> Vec<String> {
    fs::read_to_string(dir.join("commands.log"))
        .unwrap_or_default()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_help_lists_subcommands() {
    Command::cargo_bin("wsmgr")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("renumber"))
        .stdout(predicate::str::contains("load"));
}

#[test]
fn test_profiles_lists_directories() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("work")).unwrap();
    fs::create_dir(temp.path().join("mail")).unwrap();

    wsmgr(temp.path())
        .arg("profiles")
        .assert()
        .success()
        .stdout("mail\nwork\n");
}

#[test]
fn test_profiles_without_config_root_is_not_an_error() {
    let temp = TempDir::new().unwrap();
    wsmgr(&temp.path().join("missing"))
        .arg("profiles")
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("No workspace profiles"));
}

#[test]
fn test_missing_message_tool_is_reported_as_unavailable() {
    let temp = TempDir::new().unwrap();
    wsmgr(temp.path())
        .args(["--ipc-binary", "/nonexistent/i3-msg", "list"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("unavailable"));
}

#[test]
fn test_list_marks_focused_workspace() {
    let temp = TempDir::new().unwrap();
    let tool = fake_tool(temp.path());

    wsmgr(temp.path())
        .args(["--ipc-binary", tool.to_str().unwrap(), "list"])
        .env("NO_COLOR", "1")
        .assert()
        .success()
        .stdout(predicate::str::contains("*    3  3: mail"))
        .stdout(predicate::str::contains("     7  7"));
}

#[test]
fn test_renumber_sends_renames_in_row_order() {
    let temp = TempDir::new().unwrap();
    let tool = fake_tool(temp.path());

    wsmgr(temp.path())
        .args(["--ipc-binary", tool.to_str().unwrap(), "renumber"])
        .assert()
        .success();

    assert_eq!(
        logged_commands(temp.path()),
        vec![
            r#"rename workspace "3: mail" to "2: mail""#,
            r#"rename workspace "7" to "3""#,
        ]
    );
}

#[test]
fn test_rename_adds_number_prefix() {
    let temp = TempDir::new().unwrap();
    let tool = fake_tool(temp.path());

    wsmgr(temp.path())
        .args(["--ipc-binary", tool.to_str().unwrap(), "rename", "1", "inbox"])
        .assert()
        .success();

    assert_eq!(
        logged_commands(temp.path()),
        vec![r#"rename workspace "3: mail" to "3: inbox""#]
    );
}

#[test]
fn test_out_of_range_row_is_rejected_before_any_command() {
    let temp = TempDir::new().unwrap();
    let tool = fake_tool(temp.path());

    wsmgr(temp.path())
        .args(["--ipc-binary", tool.to_str().unwrap(), "activate", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Row 9 does not exist"));

    assert!(logged_commands(temp.path()).is_empty());
}

#[test]
fn test_autosave_writes_configured_file() {
    let temp = TempDir::new().unwrap();
    let tool = fake_tool(temp.path());
    fs::write(temp.path().join("config.yaml"), "autosave:\n  file: saved.json\n").unwrap();

    wsmgr(temp.path())
        .args(["--ipc-binary", tool.to_str().unwrap(), "autosave"])
        .assert()
        .success();

    let saved = fs::read_to_string(temp.path().join("saved.json")).unwrap();
    assert!(saved.contains("3: mail"));
}

#[test]
fn test_unknown_config_key_fails() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("config.yaml"), "bogus: 1\n").unwrap();

    wsmgr(temp.path())
        .arg("profiles")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_add_with_empty_label_uses_default() {
    let temp = TempDir::new().unwrap();
    let tool = fake_tool(temp.path());

    wsmgr(temp.path())
        .args(["--ipc-binary", tool.to_str().unwrap(), "add", ""])
        .assert()
        .success();

    assert_eq!(
        logged_commands(temp.path()),
        vec![r#"move container to workspace "8: unnamed"; workspace "8: unnamed""#]
    );
}
