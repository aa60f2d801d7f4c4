//! CLI integration tests
//!
//! These tests run the wishcraft binary against a throwaway config and data
//! directory and check output and exit codes.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Path to the wishcraft binary built for this test run
fn wishcraft_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_wishcraft"))
}

/// Temp workspace with a wishcraft.toml pointing at `data/`.
fn workspace(extra_config: &str) -> TempDir {
    let temp = TempDir::new().expect("should create temp dir");
    let config = format!("[storage]\ndir = \"data\"\n{}", extra_config);
    fs::write(temp.path().join("wishcraft.toml"), config).expect("should write config");
    temp
}

fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(wishcraft_binary())
        .arg("--config")
        .arg(dir.join("wishcraft.toml"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute wishcraft")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_compose_birthday() {
    let ws = workspace("");
    let output = run(
        ws.path(),
        &["compose", "--occasion", "birthday", "--name", "Aanya", "--age", "21", "--relation", "Friend"],
    );

    assert!(output.status.success(), "compose failed: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.starts_with("Design a minimal luxe birthday wish poster"));
    assert!(out.contains("\"Happy Birthday, Aanya!\""));
    assert!(out.contains("turning 21"));
}

#[test]
fn test_compose_uses_config_defaults() {
    let ws = workspace("[defaults]\noccasion = \"festival\"\nfestival = \"holi\"\nlanguage = \"hi\"\n");
    let output = run(ws.path(), &["compose"]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("होली की शुभकामनाएँ"));

    // Flags win over config
    let output = run(ws.path(), &["compose", "--lang", "en"]);
    assert!(stdout(&output).contains("\"Happy Holi\""));
}

#[test]
fn test_compose_unknown_id_warns() {
    let ws = workspace("");
    let output = run(ws.path(), &["compose", "--style", "cyberpunk"]);

    assert!(output.status.success());
    assert!(stdout(&output).starts_with("Design a cyberpunk birthday wish poster"));
    assert!(stderr(&output).contains("Warning: unknown style 'cyberpunk'"));
}

#[test]
fn test_compose_strict_fails_on_unknown_id() {
    let ws = workspace("");
    let output = run(ws.path(), &["compose", "--strict", "--lighting", "moonlight"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("unknown lighting 'moonlight'"));
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_compose_from_state_file() {
    let ws = workspace("");
    let state = ws.path().join("state.json");
    fs::write(&state, r#"{"occasion": "anniversary", "name": "Aarav", "partner_name": "Anaya"}"#)
        .unwrap();

    let output = run(ws.path(), &["compose", "--state", state.to_str().unwrap()]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("anniversary wish for Aarav & Anaya."));
}

#[test]
fn test_compose_bad_state_file_is_invalid_args() {
    let ws = workspace("");
    let output = run(ws.path(), &["compose", "--state", "does-not-exist.json"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_invalid_config_is_invalid_args() {
    let ws = workspace("[defaults]\nlanguage = \"fr\"\n");
    let output = run(ws.path(), &["options", "style"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("defaults.language"));
}

#[test]
fn test_festival_lifecycle() {
    let ws = workspace("");

    let added = run(
        ws.path(),
        &["festivals", "add", "--label", "Pongal", "--palette", "#FFB300,#6D4C41", "--motifs", "clay pot, sugarcane", "--greet-en", "Happy Pongal"],
    );
    assert!(added.status.success(), "{}", stderr(&added));
    assert_eq!(stdout(&added).trim(), "Added festival 'pongal'");
    assert!(ws.path().join("data").join("wishcraft_user_festivals_v1.json").exists());

    let again = run(ws.path(), &["festivals", "add", "--label", "Pongal"]);
    assert_eq!(stdout(&again).trim(), "Updated festival 'pongal'");

    let list = stdout(&run(ws.path(), &["festivals", "list"]));
    assert!(list.contains("diwali"));
    assert_eq!(list.matches("pongal").count(), 1);

    let composed = run(ws.path(), &["compose", "--occasion", "festival", "--festival", "pongal"]);
    assert!(stdout(&composed).contains("poster for Pongal."));

    let removed = run(ws.path(), &["festivals", "remove", "pongal"]);
    assert!(removed.status.success());
    let shown = run(ws.path(), &["festivals", "show", "pongal"]);
    assert_eq!(shown.status.code(), Some(1));
}

#[test]
fn test_festival_builtin_rules() {
    let ws = workspace("");

    let clash = run(ws.path(), &["festivals", "add", "--label", "Holi"]);
    assert_eq!(clash.status.code(), Some(2));
    assert!(stderr(&clash).contains("reserved"));

    let remove = run(ws.path(), &["festivals", "remove", "diwali"]);
    assert_eq!(remove.status.code(), Some(2));
}

#[test]
fn test_festival_show_suggests() {
    let ws = workspace("");
    let output = run(ws.path(), &["festivals", "show", "diwaly"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Did you mean 'diwali'"));
}

#[test]
fn test_festival_list_json() {
    let ws = workspace("");
    let output = run(ws.path(), &["festivals", "list", "--json"]);
    let parsed: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(parsed.as_array().map(Vec::len), Some(6));
}

#[test]
fn test_history_save_and_show() {
    let ws = workspace("");
    run(ws.path(), &["compose", "--save", "--name", "One"]);
    run(ws.path(), &["compose", "--save", "--name", "Two"]);
    run(ws.path(), &["compose", "--save", "--name", "One"]);

    let list = stdout(&run(ws.path(), &["history", "list"]));
    assert_eq!(list.lines().count(), 2);

    let newest = stdout(&run(ws.path(), &["history", "show", "1"]));
    assert!(newest.contains("Happy Birthday, One!"));

    let missing = run(ws.path(), &["history", "show", "5"]);
    assert_eq!(missing.status.code(), Some(1));

    assert!(run(ws.path(), &["history", "clear"]).status.success());
    assert!(stdout(&run(ws.path(), &["history", "list"])).contains("No saved prompts."));
}

#[test]
fn test_options() {
    let ws = workspace("");
    let output = run(ws.path(), &["options", "language"]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("te"));
    assert!(out.contains("Telugu"));

    let unknown = run(ws.path(), &["options", "styel"]);
    assert_eq!(unknown.status.code(), Some(2));
    assert!(stderr(&unknown).contains("Did you mean 'style'"));
}
