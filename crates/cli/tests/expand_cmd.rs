//! Tests for the `shelfmark expand` and `shelfmark plan` subcommands.

use std::fs;
use std::process::Command;

use assert_cmd::cargo;

fn shelfmark_cmd() -> Command {
    Command::new(cargo::cargo_bin!("shelfmark"))
}

fn write_temp_config(content: &str) -> (tempfile::TempDir, String) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.yaml");
    fs::write(&path, content).expect("write temp config");
    (dir, path.to_string_lossy().to_string())
}

#[test]
fn expand_lists_addresses_in_order() {
    let (_dir, config) = write_temp_config("addrs: [\"Z{01..02}-{1..2}\"]\n");
    let output = shelfmark_cmd()
        .args(["expand", &config, "--output", "pretty"])
        .output()
        .expect("run expand");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, vec!["Z01•1", "Z01•2", "Z02•1", "Z02•2"]);
}

#[test]
fn expand_json_envelope_has_addrs_and_skips() {
    let (_dir, config) = write_temp_config("addrs: [\"A{1..2}\", \"A{bad\"]\n");
    let output = shelfmark_cmd()
        .args(["expand", &config, "--output", "json"])
        .output()
        .expect("run expand");
    assert!(output.status.success());

    let v: serde_json::Value = serde_json::from_slice(&output.stdout).expect("JSON stdout");
    assert_eq!(v["addrs"].as_array().unwrap().len(), 2);
    assert_eq!(v["addrs"][0]["text"], "A1");
    let skipped = v["skipped"].as_array().unwrap();
    assert_eq!(skipped.len(), 1);
    assert_eq!(skipped[0]["pattern"], "A{bad");
}

#[test]
fn expand_includes_section_addresses_after_patterns() {
    let (_dir, config) = write_temp_config(
        "addrs: [\"P1\"]\nsections:\n  - zone: \"A\"\n    shelfs: 1\n    rows: 1\n",
    );
    let output = shelfmark_cmd()
        .args(["expand", &config, "--output", "pretty"])
        .output()
        .expect("run expand");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().collect::<Vec<_>>(), vec!["P1", "A01•1"]);
}

#[test]
fn plan_json_reports_pages_and_placements() {
    let (_dir, config) = write_temp_config(
        "addrs: [\"X{1..5}\"]\nrender:\n  rows: 2\n  columns: 2\n",
    );
    let output = shelfmark_cmd()
        .args(["plan", &config, "--output", "json"])
        .output()
        .expect("run plan");
    assert!(output.status.success());

    let v: serde_json::Value = serde_json::from_slice(&output.stdout).expect("JSON stdout");
    assert_eq!(v["plan"]["page_count"], 2);
    assert_eq!(v["plan"]["placements"].as_array().unwrap().len(), 5);
    // Portrait A4 by default.
    assert_eq!(v["plan"]["page_width"], 595.0);
    assert_eq!(v["plan"]["page_height"], 842.0);
}

#[test]
fn plan_rejects_a_degenerate_grid() {
    let (_dir, config) = write_temp_config("addrs: [\"X\"]\nrender:\n  rows: 0\n  columns: 3\n");
    let output = shelfmark_cmd()
        .args(["plan", &config])
        .output()
        .expect("run plan");
    assert!(!output.status.success());
}
