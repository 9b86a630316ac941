// ABOUTME: End-to-end tests for the bloomwell-cli binary
// ABOUTME: Runs each subcommand against temp-file and stdin inputs and checks stdout JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bloomwell Maternal Health

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::io::Write;
use std::process::{Command, Output, Stdio};

use bloomwell::intelligence::fitness_rules::{by_condition, by_symptom, daily_plan};
use serde_json::Value;
use tempfile::NamedTempFile;

fn cli() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_bloomwell-cli"));
    command
        .env_remove("RUST_LOG")
        .env_remove("BLOOMWELL_OUTPUT_FORMAT")
        .env("BLOOMWELL_LOG_LEVEL", "warn");
    command
}

fn input_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn run_with_file(args: &[&str], flag: &str, contents: &str) -> Output {
    let file = input_file(contents);
    cli()
        .args(args)
        .arg(flag)
        .arg(file.path())
        .output()
        .unwrap()
}

fn stdout_json(output: &Output) -> Value {
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_plan_from_file() {
    let output = run_with_file(
        &["plan"],
        "--profile",
        r#"{"trimester":"2nd","medicalConditions":{"diabetes":true},"symptomsText":"bleeding"}"#,
    );
    let plan = stdout_json(&output);

    assert_eq!(plan["daily_plan"][2], daily_plan::SIDE_LYING_HIP_ABDUCTION);
    assert_eq!(plan["daily_plan"][4], daily_plan::POST_MEAL_WALK);
    assert_eq!(plan["recommendations"][3], by_condition::DIABETES);
    assert_eq!(
        plan["warnings"].as_array().unwrap().last().unwrap(),
        by_symptom::BLEEDING
    );
}

#[test]
fn test_plan_from_stdin_with_preview() {
    let mut child = cli()
        .args(["plan", "--preview"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(b"null").unwrap();
    let output = child.wait_with_output().unwrap();
    let plan = stdout_json(&output);

    assert_eq!(plan["contraindications"].as_array().unwrap().len(), 4);
    assert_eq!(plan["daily_plan"].as_array().unwrap().len(), 4);
    assert_eq!(plan["recommendations"].as_array().unwrap().len(), 2);
}

#[test]
fn test_plan_rejects_non_object_profile() {
    let output = run_with_file(&["plan"], "--profile", "[1, 2, 3]");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid input"));
}

#[test]
fn test_unknown_format_is_rejected_by_argument_parser() {
    let output = cli().args(["--format", "yaml", "plan"]).output().unwrap();
    assert!(!output.status.success());
}

#[test]
fn test_kicks_reports_alert() {
    let output = run_with_file(
        &["kicks"],
        "--log",
        r#"{
            "started_at": "2025-06-01T20:00:00Z",
            "kicks": ["2025-06-01T20:10:00Z", "2025-06-01T20:30:00Z"],
            "now": "2025-06-01T22:05:00Z"
        }"#,
    );
    let status = stdout_json(&output);

    assert_eq!(status["count"], 2);
    assert_eq!(status["remaining"], 8);
    assert_eq!(status["alert"], true);
}

#[test]
fn test_contractions_summary() {
    // every 5 minutes, 70 seconds each, across the whole hour before `now`
    let contractions: Vec<Value> = (0..12)
        .map(|i| {
            let minute = i * 5;
            serde_json::json!({
                "started_at": format!("2025-09-02T03:{minute:02}:00Z"),
                "ended_at": format!("2025-09-02T03:{:02}:10Z", minute + 1),
            })
        })
        .collect();
    let log = serde_json::json!({
        "contractions": contractions,
        "now": "2025-09-02T04:00:00Z"
    });
    let output = run_with_file(&["contractions"], "--log", &log.to_string());
    let summary = stdout_json(&output);

    assert_eq!(summary["count"], 12);
    assert_eq!(summary["average_duration_seconds"], 70.0);
    assert_eq!(summary["average_interval_seconds"], 300.0);
    assert_eq!(summary["call_provider"], true);
}

#[test]
fn test_rewards_totals() {
    let output = run_with_file(
        &["rewards"],
        "--log",
        r#"[
            {"action": "daily_check_in", "at": "2025-03-14T08:00:00Z"},
            {"action": "marketplace_booking", "at": "2025-03-14T09:00:00Z"},
            {"points": 70, "reason": "streak bonus", "at": "2025-03-14T10:00:00Z"}
        ]"#,
    );
    let report = stdout_json(&output);

    assert_eq!(report["summary"]["total_points"], 105);
    assert_eq!(report["summary"]["level"], 2);
    assert_eq!(report["summary"]["entries"], 3);
    assert_eq!(report["awards"][2]["leveled_up"], true);
}

#[test]
fn test_rewards_points_per_level_from_environment() {
    let file = input_file(r#"[{"action": "community_post", "at": "2025-03-14T08:00:00Z"}]"#);
    let output = cli()
        .env("BLOOMWELL_POINTS_PER_LEVEL", "5")
        .args(["rewards", "--log"])
        .arg(file.path())
        .output()
        .unwrap();
    let report = stdout_json(&output);
    assert_eq!(report["summary"]["level"], 2);
}

fn assert_clean_failure(output: &Output, message: &str) {
    assert_eq!(
        output.status.code(),
        Some(1),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains(message), "stderr: {stderr}");
    assert!(!stderr.contains("panicked"), "stderr: {stderr}");
}

#[test]
fn test_kicks_rejects_out_of_range_window() {
    let output = run_with_file(
        &["kicks"],
        "--log",
        r#"{"started_at":"2025-01-01T00:00:00Z","kicks":[],"window_minutes":9223372036854775807}"#,
    );
    assert_clean_failure(&output, "Invalid input");
}

#[test]
fn test_kicks_accepts_maximum_target() {
    let output = run_with_file(
        &["kicks"],
        "--log",
        r#"{"started_at":"2025-01-01T00:00:00Z","kicks":[],"target":4294967295,"now":"2025-01-01T00:30:00Z"}"#,
    );
    let status = stdout_json(&output);
    assert_eq!(status["remaining"], 4_294_967_295_u64);
    assert_eq!(status["alert"], false);
}

#[test]
fn test_contractions_rejects_out_of_range_window_setting() {
    let file = input_file(r#"{"contractions":[],"now":"2025-09-02T04:00:00Z"}"#);
    let output = cli()
        .env("BLOOMWELL_CONTRACTION_WINDOW_MINUTES", "9223372036854775807")
        .args(["contractions", "--log"])
        .arg(file.path())
        .output()
        .unwrap();
    assert_clean_failure(&output, "Configuration error");
}

#[test]
fn test_rewards_level_saturates_with_single_point_levels() {
    let file = input_file(
        r#"[
            {"points": 18446744073709551615, "reason": "jackpot", "at": "2025-03-14T08:00:00Z"},
            {"action": "daily_check_in", "at": "2025-03-14T09:00:00Z"}
        ]"#,
    );
    let output = cli()
        .env("BLOOMWELL_POINTS_PER_LEVEL", "1")
        .args(["rewards", "--log"])
        .arg(file.path())
        .output()
        .unwrap();
    let report = stdout_json(&output);

    assert_eq!(report["summary"]["total_points"], u64::MAX);
    assert_eq!(report["summary"]["level"], u64::MAX);
    assert_eq!(report["summary"]["points_to_next_level"], 0);
    assert_eq!(report["awards"][1]["leveled_up"], false);
}
