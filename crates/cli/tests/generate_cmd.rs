//! End-to-end tests for the `shelfmark generate` subcommand.

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

const BASIC_CONFIG: &str = r#"
sections:
  - zone: "A"
    shelfs: 1
    rows: 2
render:
  rows: 2
  columns: 1
  qrcode_resolution: 64
"#;

#[test]
fn generate_writes_a_pdf() {
    let (dir, config) = write_temp_config(BASIC_CONFIG);
    let out = dir.path().join("sheet.pdf");
    let output = shelfmark_cmd()
        .args(["generate", &config, "-o", &out.to_string_lossy()])
        .output()
        .expect("run generate");
    assert!(
        output.status.success(),
        "stderr={}",
        String::from_utf8_lossy(&output.stderr)
    );

    let pdf = fs::read(&out).expect("read generated pdf");
    assert!(pdf.starts_with(b"%PDF-"));
}

#[test]
fn generate_json_reports_counts() {
    let (dir, config) = write_temp_config(BASIC_CONFIG);
    let out = dir.path().join("sheet.pdf");
    let output = shelfmark_cmd()
        .args([
            "generate",
            &config,
            "-o",
            &out.to_string_lossy(),
            "--output",
            "json",
        ])
        .output()
        .expect("run generate");
    assert!(output.status.success());

    let v: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is a single JSON object");
    assert_eq!(v["labels"], 2);
    assert_eq!(v["pages"], 1);
    assert_eq!(v["pattern_skips"].as_array().unwrap().len(), 0);
}

#[test]
fn generate_reads_config_from_stdin() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("sheet.pdf");
    let output = shelfmark_cmd()
        .args(["generate", "-", "-o", &out.to_string_lossy()])
        .env("NO_COLOR", "1")
        .stdin(std::process::Stdio::piped())
        .stdout(std::process::Stdio::piped())
        .stderr(std::process::Stdio::piped())
        .spawn()
        .and_then(|mut child| {
            use std::io::Write;
            child
                .stdin
                .take()
                .expect("stdin piped")
                .write_all(BASIC_CONFIG.as_bytes())?;
            child.wait_with_output()
        })
        .expect("run generate via stdin");
    assert!(
        output.status.success(),
        "stderr={}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(fs::read(&out).expect("pdf written").starts_with(b"%PDF-"));
}

#[test]
fn invalid_grid_fails_with_context() {
    // No rows/columns: the layout engine must reject the grid.
    let (dir, config) = write_temp_config("addrs: [\"X\"]\n");
    let out = dir.path().join("sheet.pdf");
    let output = shelfmark_cmd()
        .args(["generate", &config, "-o", &out.to_string_lossy()])
        .output()
        .expect("run generate");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid grid"), "stderr={stderr}");
    assert!(!out.exists(), "no partial document on fatal errors");
}

#[test]
fn unparseable_config_fails_with_context() {
    let (dir, config) = write_temp_config("sections: \"not a list\"\n");
    let out = dir.path().join("sheet.pdf");
    let output = shelfmark_cmd()
        .args(["generate", &config, "-o", &out.to_string_lossy()])
        .output()
        .expect("run generate");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to parse configuration"), "stderr={stderr}");
}

#[test]
fn bad_pattern_warns_but_succeeds() {
    let (dir, config) = write_temp_config(
        "addrs: [\"B{1..2}\", \"B{oops\"]\nrender:\n  rows: 2\n  columns: 2\n  qrcode_resolution: 64\n",
    );
    let out = dir.path().join("sheet.pdf");
    let output = shelfmark_cmd()
        .args(["generate", &config, "-o", &out.to_string_lossy()])
        .output()
        .expect("run generate");
    assert!(output.status.success());
    assert!(out.exists());
}

#[test]
fn strict_mode_fails_on_skips() {
    let (dir, config) = write_temp_config(
        "addrs: [\"B{1..2}\", \"B{oops\"]\nrender:\n  rows: 2\n  columns: 2\n  qrcode_resolution: 64\n",
    );
    let out = dir.path().join("sheet.pdf");
    let output = shelfmark_cmd()
        .args(["generate", &config, "-o", &out.to_string_lossy(), "--strict"])
        .output()
        .expect("run generate");
    assert!(!output.status.success());
    // The document is still written; strict only changes the exit code.
    assert!(out.exists());
}
