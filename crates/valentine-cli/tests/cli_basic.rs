//! Basic CLI E2E tests.
//!
//! Tests invoke the built binary with an isolated HOME and verify outputs.

use std::io::Write;
use std::process::{Command, Stdio};

use tempfile::TempDir;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(home: &TempDir, args: &[&str]) -> (String, String, i32) {
    run_cli_with_input(home, args, "")
}

fn run_cli_with_input(home: &TempDir, args: &[&str], input: &str) -> (String, String, i32) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_valentine-cli"))
        .args(args)
        .env("HOME", home.path())
        .env_remove("VALENTINE_ENV")
        .env("NO_COLOR", "1")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute CLI command");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(input.as_bytes())
        .expect("Failed to write stdin");

    let output = child.wait_with_output().expect("Failed to wait for CLI");
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn home() -> TempDir {
    tempfile::tempdir().expect("temp home")
}

#[test]
fn test_preview_default_card() {
    let home = home();
    let (stdout, _, code) = run_cli(&home, &["preview", "--seed", "1"]);
    assert_eq!(code, 0, "Preview failed");
    assert!(stdout.contains("Will you be my Valentine?"));
    assert!(stdout.contains("CHOOSE YOUR DESTINY"));
    assert!(stdout.contains("[n] No"));
}

#[test]
fn test_preview_past_decline_limit() {
    let home = home();
    let (stdout, _, code) = run_cli(&home, &["preview", "--declines", "9", "--seed", "1"]);
    assert_eq!(code, 0);
    assert!(!stdout.contains("[n] No"));
    assert!(stdout.contains("The Yes button is taking over!"));
}

#[test]
fn test_preview_json_snapshot() {
    let home = home();
    let (stdout, _, code) = run_cli(&home, &["preview", "--declines", "3", "--json"]);
    assert_eq!(code, 0);
    let snap: serde_json::Value = serde_json::from_str(&stdout).expect("JSON snapshot");
    assert_eq!(snap["type"], "StateSnapshot");
    assert_eq!(snap["phase"], "proposal");
    assert_eq!(snap["decline_count"], 3);
    assert_eq!(snap["glowing"], true);
}

#[test]
fn test_preview_accepted() {
    let home = home();
    let (stdout, _, code) = run_cli(&home, &["preview", "--accepted", "--seed", "1"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Yay! See you on the 14th!"));
    assert!(stdout.contains("Days"));
}

#[test]
fn test_countdown_json() {
    let home = home();
    let (stdout, _, code) = run_cli(&home, &["countdown", "--json"]);
    assert_eq!(code, 0);
    let tick: serde_json::Value = serde_json::from_str(stdout.trim()).expect("JSON tick");
    assert_eq!(tick["type"], "CountdownTick");
    assert!(tick["remaining"]["days"].as_u64().unwrap() <= 366);
    assert!(tick["remaining"]["hours"].as_u64().unwrap() < 24);
}

#[test]
fn test_config_get_set() {
    let home = home();
    let (stdout, _, code) = run_cli(&home, &["config", "get", "growth.slope"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "0.4");

    let (_, _, code) = run_cli(&home, &["config", "set", "growth.slope", "0.75"]);
    assert_eq!(code, 0);
    let (stdout, _, _) = run_cli(&home, &["config", "get", "growth.slope"]);
    assert_eq!(stdout.trim(), "0.75");

    assert!(home.path().join(".config/valentine/config.toml").exists());
}

#[test]
fn test_config_rejects_bad_values() {
    let home = home();
    let (_, stderr, code) = run_cli(&home, &["config", "set", "countdown.day", "30"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("error:"));

    let (_, _, code) = run_cli(&home, &["config", "get", "no.such.key"]);
    assert_ne!(code, 0);
}

#[test]
fn test_play_decline_accept_quit() {
    let home = home();
    let (_, _, code) = run_cli(&home, &["config", "set", "notifications.enabled", "false"]);
    assert_eq!(code, 0);

    let (stdout, _, code) = run_cli_with_input(&home, &["play"], "n\nn\ny\nq\n");
    assert_eq!(code, 0, "Play failed");
    assert!(stdout.contains("Wait, let's try that again..."));
    assert!(stdout.contains("Are you really sure?"));
    assert!(stdout.contains("Yay! See you on the 14th!"));
}

#[test]
fn test_play_exits_on_eof() {
    let home = home();
    let (stdout, _, code) = run_cli_with_input(&home, &["play"], "");
    assert_eq!(code, 0);
    assert!(stdout.contains("Will you be my Valentine?"));
}
