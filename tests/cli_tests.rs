mod common;

use formcheck::{Activity, Capture, Exercise};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

struct TestContext {
    _dir: TempDir,
    squat_path: PathBuf,
    running_path: PathBuf,
    untagged_path: PathBuf,
    broken_path: PathBuf,
}

impl TestContext {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let write = |name: &str, capture: &Capture| {
            let path = dir.path().join(name);
            fs::write(&path, serde_json::to_string(capture).unwrap()).unwrap();
            path
        };

        let squat_path = write(
            "squat.json",
            &Capture {
                activity: Some(Exercise::Squat.into()),
                ..Capture::new(common::squat_with_knee_angle(115.0))
            },
        );
        let running_path = write(
            "running.json",
            &Capture {
                activity: Some(Activity::Running),
                ..Capture::new(common::running())
            },
        );
        let untagged_path = write("untagged.json", &Capture::new(common::plank()));

        let broken_path = dir.path().join("broken.json");
        fs::write(&broken_path, "{ \"landmarks\": ").unwrap();

        Self {
            _dir: dir,
            squat_path,
            running_path,
            untagged_path,
            broken_path,
        }
    }
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_formcheck"))
        .args(args)
        .output()
        .expect("Failed to execute binary")
}

fn path(p: &Path) -> &str {
    p.to_str().unwrap()
}

#[test]
fn test_cli_analyze_json() {
    let ctx = TestContext::new();
    let output = run(&["analyze", path(&ctx.squat_path), "--format", "json"]);
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(json["kind"], "gym");
    assert_eq!(json["exercise"], "squat");
    assert_eq!(json["overallScore"], 85);
    assert_eq!(json["repQuality"], "good");
    assert_eq!(json["issues"][0]["issueType"], "depth");
    assert_eq!(json["issues"][0]["severity"], "high");
}

#[test]
fn test_cli_analyze_table() {
    let ctx = TestContext::new();
    let output = run(&["analyze", path(&ctx.running_path), "--cadence", "150"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("RUNNING FORM REPORT"), "{}", stdout);
    assert!(stdout.contains("No form issues detected"));
    let score = Regex::new(r"Score\s*\|\s*100").unwrap();
    assert!(score.is_match(&stdout), "{}", stdout);
    assert!(stdout.contains("cadence is low"));
}

#[test]
fn test_cli_rejects_invalid_signal_override() {
    let ctx = TestContext::new();
    let output = run(&["analyze", path(&ctx.running_path), "--cadence=-5"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("signal 'cadence'"), "{}", stderr);

    let output = run(&["analyze", path(&ctx.running_path), "--vertical-oscillation", "NaN"]);
    assert!(!output.status.success());
}

#[test]
fn test_cli_activity_flag_overrides_file() {
    let ctx = TestContext::new();
    let output = run(&[
        "analyze",
        path(&ctx.untagged_path),
        "--activity",
        "plank",
        "-f",
        "json",
    ]);
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["exercise"], "plank");
    assert_eq!(json["overallScore"], 100);
}

#[test]
fn test_cli_missing_activity_fails() {
    let ctx = TestContext::new();
    let output = run(&["analyze", path(&ctx.untagged_path)]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no activity given"), "{}", stderr);
}

#[test]
fn test_cli_rejects_unknown_activity() {
    let ctx = TestContext::new();
    let output = run(&["analyze", path(&ctx.squat_path), "--activity", "curling"]);
    assert!(!output.status.success());
}

#[test]
fn test_cli_batch_with_bad_file_exits_non_zero() {
    let ctx = TestContext::new();
    let output = run(&[
        "batch",
        path(&ctx.squat_path),
        path(&ctx.broken_path),
        path(&ctx.running_path),
        "--format",
        "json",
    ]);
    assert!(!output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = json.as_array().expect("array of entries");
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0]["report"]["overallScore"], 85);
    assert!(entries[1]["error"].is_string());
    assert!(entries[1].get("report").is_none());
    assert_eq!(entries[2]["report"]["kind"], "running");
}

#[test]
fn test_cli_batch_success() {
    let ctx = TestContext::new();
    let output = run(&["batch", path(&ctx.squat_path), path(&ctx.running_path)]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("squat.json"));
    assert!(stdout.contains("running.json"));
}

#[test]
fn test_cli_profiles() {
    let output = run(&["profiles"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("FORM PROFILES"));
    for activity in Activity::all() {
        assert!(stdout.contains(activity.label()), "{}", activity);
    }

    let output = run(&["profiles", "--activity", "bench-press"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Bench Press"));
    assert!(stdout.contains("grip_width"));
    assert!(!stdout.contains("Deadlift"));
}
