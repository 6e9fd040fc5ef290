//! Tests for the `votechain` binary.
//!
//! Each test runs the compiled binary in a subprocess and inspects its
//! stdout and exit status. Files go in per-test temporary directories.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

const VERDICT_VALID: &str = "Valid Blockchain: true";
const VERDICT_INVALID: &str = "Valid Blockchain: false";

fn votechain(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_votechain"))
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("VOTECHAIN_LOG")
        .env_remove("VOTECHAIN_LOG_FORMAT")
        .output()
        .expect("failed to spawn votechain")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("utf-8 stdout")
}

/// Writes a chain to `dir/chain.json` via `run -o` and returns its path.
fn export_chain(dir: &TempDir, votes: &[&str]) -> std::path::PathBuf {
    let path = dir.path().join("chain.json");
    let target = path.to_str().expect("utf-8 path").to_string();
    let mut args = vec!["run", "-o", target.as_str()];
    for vote in votes {
        args.push("--vote");
        args.push(vote);
    }
    let output = votechain(&args);
    assert!(output.status.success(), "run failed: {:?}", output);
    path
}

fn read_blocks(path: &Path) -> Vec<serde_json::Value> {
    let json = fs::read_to_string(path).expect("read export");
    serde_json::from_str(&json).expect("export is a JSON array")
}

#[test]
fn run_without_votes_uses_sample_scenario() {
    let output = votechain(&["run"]);
    assert!(output.status.success());

    let out = stdout(&output);
    let (json, verdict) = out
        .trim_end()
        .rsplit_once('\n')
        .expect("json followed by verdict");
    assert_eq!(verdict, VERDICT_VALID);

    let blocks: Vec<serde_json::Value> = serde_json::from_str(json).expect("chain json");
    assert_eq!(blocks.len(), 3);
    assert_eq!(blocks[1]["data"]["vote"], 22);
    assert_eq!(blocks[2]["data"]["cpf"], "000.000.000-01");
    assert_eq!(blocks[2]["previousHash"], blocks[1]["hash"]);
    assert!(json.contains("\n\t{"));
}

#[test]
fn run_with_output_file() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("out.json");
    let output = votechain(&[
        "run",
        "--vote",
        "111.222.333-44:5",
        "--vote",
        "555.666.777-88:-2",
        "--output",
        path.to_str().expect("utf-8 path"),
    ]);

    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), VERDICT_VALID);

    let blocks = read_blocks(&path);
    assert_eq!(blocks.len(), 3);
    assert_eq!(blocks[2]["data"]["vote"], -2);
}

#[test]
fn verify_accepts_untouched_export() {
    let dir = TempDir::new().expect("tempdir");
    let path = export_chain(&dir, &["a:1", "b:2", "c:3"]);

    let output = votechain(&["verify", path.to_str().expect("utf-8 path")]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), VERDICT_VALID);
}

#[test]
fn verify_rejects_tampered_export() {
    let dir = TempDir::new().expect("tempdir");
    let path = export_chain(&dir, &["a:22", "b:13"]);

    let json = fs::read_to_string(&path).expect("read export");
    fs::write(&path, json.replacen("\"vote\": 22", "\"vote\": 99", 1)).expect("write");

    let output = votechain(&["verify", path.to_str().expect("utf-8 path")]);
    assert!(!output.status.success());
    assert_eq!(stdout(&output).trim(), VERDICT_INVALID);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("digest mismatch"), "stderr: {}", stderr);
}

#[test]
fn verify_missing_file_fails() {
    let dir = TempDir::new().expect("tempdir");
    let missing = dir.path().join("nope.json");
    let output = votechain(&["verify", missing.to_str().expect("utf-8 path")]);
    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
}

#[test]
fn verify_malformed_file_fails() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("bad.json");
    fs::write(&path, "{ not a chain").expect("write");
    let output = votechain(&["verify", path.to_str().expect("utf-8 path")]);
    assert!(!output.status.success());
}

#[test]
fn bad_vote_argument_is_rejected() {
    let output = votechain(&["run", "--vote", "missing-choice"]);
    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
}

#[test]
fn version_reports_digest_algorithm() {
    let output = votechain(&["version"]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.starts_with("votechain "));
    assert!(out.contains("SHA-256"));
}
