//! CLI binary smoke tests using assert_cmd.
//!
//! These tests run the compiled `vecspace` binary with `--no-plot` or an
//! output file so no browser window is opened.

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("vecspace").unwrap()
}

// ---------------------------------------------------------------------------
// Top-level
// ---------------------------------------------------------------------------

#[test]
fn help_flag() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--no-plot"))
        .stdout(predicate::str::contains("--report"));
}

#[test]
fn version_flag() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("vecspace"));
}

#[test]
fn default_run_prints_magnitude_and_matrix() {
    cmd()
        .arg("--no-plot")
        .assert()
        .success()
        .stdout(predicate::str::contains("2D Vector v1: [3, 4]"))
        .stdout(predicate::str::contains("3D Vector v2: [-1, 2, 5]"))
        .stdout(predicate::str::contains("Magnitude of v1: 5.00"))
        .stdout(predicate::str::contains("Point A = 3*e1 + 2*e2 = [3, 2]"))
        .stdout(predicate::str::contains("Point B = 1*e1 + 4*e2 + 2*e3 = [1, 4, 2]"))
        .stdout(predicate::str::contains("[[3, 3, 1],\n [4, 2, 4]]"))
        .stdout(predicate::str::contains("=== ML CONNECTIONS ==="))
        .stdout(predicate::str::contains("Opening plot window").not());
}

#[test]
fn print_config_emits_defaults() {
    cmd()
        .arg("--print-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"plane_coefficients\""))
        .stdout(predicate::str::contains("\"space_coefficients\""))
        .stdout(predicate::str::contains("\"figure\""));
}

// ---------------------------------------------------------------------------
// Output files
// ---------------------------------------------------------------------------

#[test]
fn output_writes_figure_html() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("figure.html");

    cmd()
        .arg("--output")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("=== VISUALIZATION (Writing"));

    let html = std::fs::read_to_string(&path).unwrap();
    assert!(html.contains("Feature 1"));
    assert!(html.contains("v3"));
}

#[test]
fn report_writes_html_page() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.html");

    cmd()
        .args(["--no-plot", "--report"])
        .arg(&path)
        .assert()
        .success();

    let html = std::fs::read_to_string(&path).unwrap();
    assert!(html.contains("<h2>Walkthrough</h2>"));
    assert!(html.contains("<h2>Configuration</h2>"));
    assert!(html.contains("Magnitude of v1: 5.00"));
}

#[test]
fn output_with_wrong_extension_errors() {
    cmd()
        .args(["--output", "figure.png"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(".html"));
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

#[test]
fn nonexistent_config_errors() {
    cmd()
        .args(["/nonexistent/config.json", "--no-plot"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read config file"));
}

#[test]
fn config_overrides_vectors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "v1": [6.0, 8.0] }"#).unwrap();

    cmd()
        .arg(&path)
        .arg("--no-plot")
        .assert()
        .success()
        .stdout(predicate::str::contains("Magnitude of v1: 10.00"))
        .stdout(predicate::str::contains("[[6, 3, 1],\n [8, 2, 4]]"));
}

#[test]
fn config_with_mismatched_dimensions_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "plane_coefficients": [1.0, 2.0, 3.0] }"#).unwrap();

    cmd()
        .arg(&path)
        .arg("--no-plot")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Walkthrough failed"));
}

#[test]
fn malformed_config_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ \"v1\": [3.0, ").unwrap();

    cmd()
        .arg(&path)
        .arg("--no-plot")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read config file"));
}

#[test]
fn config_too_short_for_plane_reports_cause() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "space_coefficients": [5.0] }"#).unwrap();

    cmd()
        .arg(&path)
        .arg("--no-plot")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Invalid demo inputs: Cannot keep the first 2 components of a vector of dimension 1",
        ))
        .stderr(predicate::str::contains("do not line up").not());
}
