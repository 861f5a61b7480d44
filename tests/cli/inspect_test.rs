//! Tests for `cchooks inspect`.

use std::io::{ErrorKind, Write};
use std::path::Path;
use std::process::{Command, Output, Stdio};

fn inspect(args: &[&str], config: &Path, stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_cchooks"))
        .arg("inspect")
        .arg("--config")
        .arg(config)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute command");

    let mut pipe = child.stdin.take().expect("stdin is piped");
    // The binary may exit before reading stdin, e.g. on a bad config file.
    if let Err(e) = pipe.write_all(stdin.as_bytes()) {
        assert_eq!(e.kind(), ErrorKind::BrokenPipe, "Failed to write stdin: {e}");
    }
    drop(pipe);
    child.wait_with_output().expect("Failed to wait for command")
}

const STOP: &str =
    r#"{"hook_event_name":"Stop","session_id":"sess-1","transcript_path":"t","stop_hook_active":true}"#;

#[test]
fn test_inspect_help() {
    let output = Command::new(env!("CARGO_BIN_EXE_cchooks"))
        .args(["inspect", "--help"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--json"), "Help should mention --json flag");
    assert!(stdout.contains("--config"), "Help should mention --config flag");
}

#[test]
fn test_inspect_summary() {
    let dir = tempfile::tempdir().unwrap();
    let output = inspect(&[], &dir.path().join("none.toml"), STOP);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
    assert!(stderr.contains("[Stop] session=sess-1"), "{stderr}");
    assert!(stderr.contains("stop_hook_active=true"), "{stderr}");
}

#[test]
fn test_inspect_json() {
    let dir = tempfile::tempdir().unwrap();
    let output = inspect(&["--json"], &dir.path().join("none.toml"), STOP);
    let value: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(value["hook_event_name"], "Stop");
    assert_eq!(value["stop_hook_active"], true);
}

#[test]
fn test_inspect_bad_input_default_policy() {
    let dir = tempfile::tempdir().unwrap();
    let output = inspect(&[], &dir.path().join("none.toml"), "not json");
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.starts_with("Hook input is not a valid JSON object"), "{stderr}");
}

#[test]
fn test_inspect_bad_input_blocking_policy() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("cchooks.toml");
    std::fs::write(&config, "[errors]\nmode = \"blocking\"\n").unwrap();

    let output = inspect(&[], &config, r#"{"hook_event_name":"Bogus"}"#);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.contains("Unsupported hook event type: Bogus"), "{stderr}");
}

#[test]
fn test_inspect_invalid_config() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("cchooks.toml");
    std::fs::write(&config, "[errors\n").unwrap();

    let output = inspect(&[], &config, STOP);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("Failed to parse config file"), "{stderr}");
}
