// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// End-to-end runs of the `lesewerk` binary.

use std::io::Write;
use std::process::{Command, Output, Stdio};

use serde_json::Value;

const REFERENCE: &str = "We leverage cutting-edge technology to facilitate seamless experiences. \
    This is a very very very very very very very very very very very very very very very very \
    very very very very long sentence that exceeds the word threshold easily.";

fn lesewerk() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_lesewerk"));
    cmd.env_remove("RUST_LOG");
    cmd
}

fn run_with_stdin(args: &[&str], stdin: &str) -> Output {
    let mut child = lesewerk()
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn lesewerk");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn analyze_reads_stdin() {
    let output = run_with_stdin(&["analyze"], REFERENCE);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let report: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(report["gradeLevel"].as_f64().unwrap() > 9.0);
    assert_eq!(report["totalIssues"], 5);
    assert_eq!(
        report["jargon"],
        serde_json::json!(["leverage", "facilitate", "cutting-edge"])
    );
    assert_eq!(report["suggestions"][0]["type"], "grade-level");
}

#[test]
fn analyze_reads_files() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("welcome.txt");
    std::fs::write(&path, "Welcome back. Sign in to continue.").unwrap();

    let output = lesewerk().arg("analyze").arg(&path).output().unwrap();
    assert!(output.status.success());

    let report: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["totalIssues"], 0);
    assert_eq!(report["suggestions"], serde_json::json!([]));
}

#[test]
fn export_writes_aggregate_document() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("signup.txt");
    let second = dir.path().join("error.txt");
    let out = dir.path().join("report.json");
    std::fs::write(&first, REFERENCE).unwrap();
    std::fs::write(&second, "The form is submitted.").unwrap();

    let output = lesewerk()
        .arg("export")
        .arg(&first)
        .arg(&second)
        .arg("-o")
        .arg(&out)
        .output()
        .unwrap();
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let doc: Value = serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(doc["summary"]["totalImages"], 2);
    assert_eq!(doc["summary"]["totalIssues"], 6);
    assert_eq!(doc["results"][0]["filename"], "signup.txt");
    assert_eq!(doc["results"][1]["passiveVoice"], serde_json::json!(["is submitted"]));
    assert!(doc["generatedAt"].is_string());
}

#[test]
fn missing_input_exits_with_failure() {
    let dir = tempfile::tempdir().unwrap();
    let output = lesewerk()
        .arg("analyze")
        .arg(dir.path().join("absent.txt"))
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(!output.stderr.is_empty());
}

#[test]
fn remote_scan_without_credentials_explains_itself() {
    let dir = tempfile::tempdir().unwrap();
    let shot = dir.path().join("login.png");
    image::GrayImage::from_pixel(8, 8, image::Luma([200]))
        .save(&shot)
        .unwrap();

    let output = lesewerk()
        .env_remove("LESEWERK_OCR_ENDPOINT")
        .env_remove("LESEWERK_OCR_KEY")
        .env_remove("LESEWERK_OCR_FALLBACK")
        .args(["scan", "--remote"])
        .arg(&shot)
        .arg("-o")
        .arg(dir.path().join("out.json"))
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("LESEWERK_OCR_ENDPOINT"));
}
