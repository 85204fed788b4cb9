#![cfg(feature = "std")]

use std::process::{Command, Stdio};

fn play_json() -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_scrabble"))
        .args(["play", "--player", "Alice", "--seed", "1", "--json"])
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .env("SCRABBLE_LOG", "info")
        .stdin(Stdio::null())
        .output()
        .expect("failed to run scrabble binary")
}

#[test]
fn play_json_stdout_is_only_the_summary() {
    let output = play_json();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(&stdout).expect("invalid json");
    assert_eq!(v["end"], "Abandoned");
    assert_eq!(v["turns_played"], 0);
    assert_eq!(v["players"][0]["name"], "Alice");
    assert!(v["winner"].is_string());

    // prompts and log lines still reach the terminal, on stderr
    let stderr = String::from_utf8(output.stderr).expect("non utf8 output");
    assert!(stderr.contains("Row of the first letter"));
    assert!(stderr.contains("INFO - new game"));
    assert!(stderr.contains("INFO - drew 7 tiles"));
    assert!(!stderr.contains("DEBUG"));
}

#[test]
fn play_json_asks_names_on_stderr() {
    let output = Command::new(env!("CARGO_BIN_EXE_scrabble"))
        .args(["play", "--seed", "3", "--json"])
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .stdin(Stdio::null())
        .output()
        .expect("failed to run scrabble binary");
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).expect("non utf8 output");
    assert!(stderr.contains("How many players?"));
}
