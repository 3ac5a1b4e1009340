//! score_once binary: stdout carries the response, stderr a readable error.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

const NEUTRAL_MODEL: &str =
    r#"{"weights":[0,0,0,0,0,0],"bias":0,"mean":[0,0,0,0,0,0],"std":[1,1,1,1,1,1]}"#;

fn score_once(model_dir: &Path, args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_score_once"))
        .arg(model_dir)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    // The binary may exit before reading stdin (e.g. no model), closing the pipe.
    let _ = child.stdin.take().unwrap().write_all(stdin.as_bytes());
    child.wait_with_output().unwrap()
}

#[test]
fn scores_stdin_record() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("model.json"), NEUTRAL_MODEL).unwrap();

    let out = score_once(dir.path(), &[], r#"{"Age":60,"Cholesterol":300}"#);
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["confidence"], "50.0%");
    assert_eq!(v["risk_level"], "MODERATE RISK");
}

#[test]
fn unsupported_content_type_reports_message() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("model.json"), NEUTRAL_MODEL).unwrap();

    let out = score_once(dir.path(), &["text/plain"], "Age=60");
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("error: unsupported content type: text/plain"));
    assert!(!stderr.contains("Extract("));
}

#[test]
fn missing_model_reports_message() {
    let dir = tempfile::tempdir().unwrap();

    let out = score_once(dir.path(), &[], "{}");
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("error: model artifact not found"));
}
