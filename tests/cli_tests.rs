// Copyright (c) 2025 - Cowboy AI, Inc.
//! Command-Line Checker Tests
//!
//! Runs the built `flavor-name` binary with a clean environment.

use pretty_assertions::assert_eq;
use scs_flavor_name::config::{OUTPUT_VAR, STRATEGY_VAR};
use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    run_with_env(args, &[])
}

fn run_with_env(args: &[&str], vars: &[(&str, &str)]) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_flavor-name"));
    command
        .args(args)
        .env_remove(STRATEGY_VAR)
        .env_remove(OUTPUT_VAR)
        .env_remove("RUST_LOG");
    for (key, value) in vars {
        command.env(key, value);
    }
    command.output().expect("run flavor-name")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("utf8 stdout")
}

#[test]
fn test_help_is_not_a_flavor_name() {
    let output = run(&["--help"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("Usage"), "{text}");
    assert!(text.contains("--output"), "{text}");
    assert!(!text.contains("NOT an SCS flavor"), "{text}");
}

#[test]
fn test_strategy_argument_selects_tolerant_parsing() {
    let output = run(&["v2/v1", "SCS-2V:4"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "");
    let stderr = String::from_utf8(output.stderr).expect("utf8 stderr");
    assert!(stderr.contains("Name is merely tolerated v1: SCS-2V:4"), "{stderr}");
}

#[test]
fn test_prose_output_flag() {
    let output = run(&["-o", "prose", "v3", "SCS-2V-4"]);
    assert_eq!(output.status.code(), Some(0));
    let text = stdout(&output);
    assert!(
        text.starts_with("SCS-2V-4: SCS flavor with 2 generic x86-64 vCPUs with 4 GiB RAM"),
        "{text}"
    );
}

#[test]
fn test_json_output_flag() {
    let output = run(&["latest", "SCS-2V-8-20s_i3h", "--output", "json"]);
    assert_eq!(output.status.code(), Some(0));
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("json extra specs");
    assert_eq!(value["cpus"], 2);
    assert_eq!(value["scs:name-v2"], "SCS-2V-8-20s_i3h");
}

#[test]
fn test_output_falls_back_to_environment() {
    let output = run_with_env(&["v3", "SCS-2V-4"], &[(OUTPUT_VAR, "prose")]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).starts_with("SCS-2V-4: SCS flavor with 2 "));
}

#[test]
fn test_exit_code_counts_invalid_names() {
    let output = run(&["V3", "SCS-2V:4", "m1.small", "SCS-2V-4_foo", "SCS-2V-4"]);
    assert_eq!(output.status.code(), Some(2));
    let text = stdout(&output);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Name is non-tolerable v1: SCS-2V:4",
            "NOT an SCS flavor: m1.small",
            "Extra characters: _foo (v3): SCS-2V-4_foo",
        ]
    );
}

#[test]
fn test_verbose_reports_accepted_names() {
    let output = run(&["-v", "v2", "SCS-2V-4"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "OK: SCS-2V-4\n");
}

#[test]
fn test_unknown_strategy_is_a_usage_error() {
    let output = run(&["v9", "SCS-2V-4"]);
    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stdout(&output), "");
}
