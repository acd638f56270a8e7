#![allow(deprecated)]

// Acceptance tests driving the offline commands end to end: scoring a
// ratings document, persisted preferences, and configuration gating.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn cinescore() -> Command {
    Command::cargo_bin("cinescore").expect("binary should compile")
}

/// Isolates a run from the developer's real config and state files.
fn sandboxed(home: &TempDir) -> Command {
    let mut cmd = cinescore();
    cmd.env("HOME", home.path())
        .env_remove("CINESCORE_TMDB_API_KEY")
        .env_remove("CINESCORE_OMDB_API_KEY")
        .current_dir(home.path());
    cmd
}

fn write_ratings(home: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = home.path().join(name);
    fs::write(&path, content).expect("ratings document should write");
    path
}

const FULL_RATINGS: &str = r#"{
    "imdb": { "rating": "8.0", "votes": "2,400,000" },
    "rottenTomatoes": { "tomatometer": "90" },
    "metacritic": { "metascore": "70" }
}"#;

#[test]
fn score_full_document_critic_focused() {
    let home = TempDir::new().expect("temp dir should be created");
    let ratings = write_ratings(&home, "ratings.json", FULL_RATINGS);

    sandboxed(&home)
        .args(["score", "--ratings"])
        .arg(&ratings)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("CineScore: 8.1/10 [high]"))
        .stdout(predicate::str::contains(
            "sources: IMDB, Rotten Tomatoes, Metacritic",
        ));
}

#[test]
fn score_full_document_audience_focused() {
    let home = TempDir::new().expect("temp dir should be created");
    let ratings = write_ratings(&home, "ratings.json", FULL_RATINGS);

    sandboxed(&home)
        .args(["score", "--focus", "audience", "--ratings"])
        .arg(&ratings)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("CineScore: 8.0/10 [high]"))
        .stdout(predicate::str::contains("audience-focused"));
}

#[test]
fn score_two_sources_renormalizes() {
    let home = TempDir::new().expect("temp dir should be created");
    let ratings = write_ratings(
        &home,
        "ratings.json",
        r#"{
            "rottenTomatoes": { "tomatometer": "60" },
            "metacritic": { "metascore": "80" }
        }"#,
    );

    sandboxed(&home)
        .args(["score", "--ratings"])
        .arg(&ratings)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("CineScore: 6.8/10 [medium]"));
}

#[test]
fn score_empty_document_warns_and_exits_one() {
    let home = TempDir::new().expect("temp dir should be created");
    let ratings = write_ratings(&home, "ratings.json", "{}");

    sandboxed(&home)
        .args(["score", "--ratings"])
        .arg(&ratings)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("CineScore: 0.0/10 [low]"))
        .stdout(predicate::str::contains("sources: none"))
        .stderr(predicate::str::contains("no usable rating sources"));
}

#[test]
fn score_json_format_emits_contract_fields() {
    let home = TempDir::new().expect("temp dir should be created");
    let ratings = write_ratings(&home, "ratings.json", FULL_RATINGS);

    sandboxed(&home)
        .args(["score", "--format", "json", "--ratings"])
        .arg(&ratings)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"score\": 8.1"))
        .stdout(predicate::str::contains("\"reliability\": \"high\""))
        .stdout(predicate::str::contains("\"Rotten Tomatoes\""));
}

#[test]
fn score_missing_file_is_a_runtime_failure() {
    let home = TempDir::new().expect("temp dir should be created");

    sandboxed(&home)
        .args(["score", "--ratings", "absent.json"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("ratings file not found"));
}

#[test]
fn score_malformed_document_is_a_runtime_failure() {
    let home = TempDir::new().expect("temp dir should be created");
    let ratings = write_ratings(&home, "ratings.json", "{ not json");

    sandboxed(&home)
        .args(["score", "--ratings"])
        .arg(&ratings)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn network_commands_require_a_tmdb_key() {
    let home = TempDir::new().expect("temp dir should be created");

    sandboxed(&home)
        .args(["details", "27205"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("missing TMDB API key"));
}

#[test]
fn prefs_defaults_then_persists_updates() {
    let home = TempDir::new().expect("temp dir should be created");

    sandboxed(&home)
        .arg("prefs")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("theme: light"))
        .stdout(predicate::str::contains("default focus: critics"));

    sandboxed(&home)
        .args(["prefs", "--theme", "dark", "--focus", "audience"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("theme: dark"))
        .stdout(predicate::str::contains("default focus: audience"));

    let state = home.path().join(".config/cinescore/state.json");
    assert!(state.exists(), "state file should be written");

    // A fresh invocation reads the persisted values back.
    sandboxed(&home)
        .arg("prefs")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("theme: dark"))
        .stdout(predicate::str::contains("default focus: audience"));
}

#[test]
fn persisted_focus_drives_offline_scoring() {
    let home = TempDir::new().expect("temp dir should be created");
    let ratings = write_ratings(&home, "ratings.json", FULL_RATINGS);

    sandboxed(&home)
        .args(["prefs", "--focus", "audience"])
        .assert()
        .code(0);

    sandboxed(&home)
        .args(["score", "--ratings"])
        .arg(&ratings)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("CineScore: 8.0/10 [high]"))
        .stdout(predicate::str::contains("audience-focused"));

    // An explicit flag still wins over the preference.
    sandboxed(&home)
        .args(["score", "--focus", "critics", "--ratings"])
        .arg(&ratings)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("CineScore: 8.1/10 [high]"));
}
