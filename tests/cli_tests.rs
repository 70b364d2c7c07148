//! CLI integration tests

use assert_cmd::Command;
use predicates::prelude::*;

fn voicepad_bin() -> Command {
    Command::cargo_bin("voicepad").expect("binary builds")
}

#[test]
fn help_output() {
    voicepad_bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Voice-note"))
        .stdout(predicate::str::contains("--server"))
        .stdout(predicate::str::contains("--lang"))
        .stdout(predicate::str::contains("--notify"));
}

#[test]
fn version_output() {
    voicepad_bin()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("voicepad"));
}

#[test]
fn invalid_language_is_a_usage_error() {
    voicepad_bin()
        .args(["--lang", "fr"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--lang"));
}

#[test]
fn config_path_command() {
    voicepad_bin()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("voicepad"))
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn config_get_unknown_key_fails() {
    voicepad_bin()
        .args(["config", "get", "unknown_key"])
        .env("HOME", "/nonexistent")
        .env("XDG_CONFIG_HOME", "/nonexistent")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown key"));
}

#[test]
fn config_set_rejects_invalid_language() {
    voicepad_bin()
        .args(["config", "set", "language", "klingon"])
        .env("HOME", "/nonexistent")
        .env("XDG_CONFIG_HOME", "/nonexistent")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid language"));
}

#[test]
fn config_init_and_list_round_trip() {
    let dir = tempfile::tempdir().unwrap();

    voicepad_bin()
        .args(["config", "init"])
        .env("HOME", dir.path())
        .env("XDG_CONFIG_HOME", dir.path())
        .assert()
        .success();

    voicepad_bin()
        .args(["config", "list"])
        .env("HOME", dir.path())
        .env("XDG_CONFIG_HOME", dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("server_url"))
        .stdout(predicate::str::contains("language"));
}

#[test]
fn interactive_session_replaces_and_prints_note() {
    voicepad_bin()
        .env("HOME", "/nonexistent")
        .env("XDG_CONFIG_HOME", "/nonexistent")
        .write_stdin("hello from the cli\n:quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("hello from the cli"));
}

#[test]
fn interactive_say_merges_transcripts() {
    voicepad_bin()
        .env("HOME", "/nonexistent")
        .env("XDG_CONFIG_HOME", "/nonexistent")
        .write_stdin(":say note to self\n:say buy milk\n:quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("note to self buy milk"));
}
