//! CLI Integration Tests
//!
//! Drive the `bento-desktop` binary through its headless modes: HTML export
//! and placement reports.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// ============================================================================
// Test Utilities
// ============================================================================

fn cli_cmd() -> Command {
    Command::cargo_bin("bento-desktop").expect("Failed to find bento-desktop binary")
}

fn placements(args: &[&str]) -> serde_json::Value {
    let output = cli_cmd()
        .arg("--placements")
        .args(args)
        .output()
        .expect("Failed to run bento-desktop");
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).expect("placements should be JSON")
}

fn cell(card: &serde_json::Value) -> (u64, u64) {
    (card["row"].as_u64().unwrap(), card["col"].as_u64().unwrap())
}

// ============================================================================
// Export Tests
// ============================================================================

#[test]
fn test_export_to_stdout() {
    cli_cmd()
        .args(["--export", "-"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<!DOCTYPE html>"))
        .stdout(predicate::str::contains("Analytics Dashboard"))
        .stdout(predicate::str::contains("cdn.tailwindcss.com"));
}

#[test]
fn test_export_classic_to_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("classic.html");

    cli_cmd()
        .args(["--screen", "classic", "--export"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let html = std::fs::read_to_string(&path).unwrap();
    assert!(html.contains("<title>Dashboard</title>"));
    assert!(html.contains("Modern bento grid interface"));
}

#[test]
fn test_export_into_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope").join("out.html");

    cli_cmd()
        .arg("--export")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to write page"));
}

// ============================================================================
// Placement Tests
// ============================================================================

#[test]
fn test_placements_default_width_is_xl() {
    let report = placements(&[]);
    assert_eq!(report["breakpoint"], "xl");
    assert_eq!(report["columns"], 6);
    assert_eq!(report["cards"].as_array().unwrap().len(), 8);
}

#[test]
fn test_placements_classic_md() {
    let report = placements(&["--screen", "classic", "--breakpoint", "md"]);
    assert_eq!(report["columns"], 4);

    let cards = report["cards"].as_array().unwrap();
    assert_eq!(cards[0]["title"], "Welcome Back!");
    assert_eq!(cards[0]["col_span"], 2);
    assert_eq!(cards[0]["row_span"], 2);

    let cells: Vec<(u64, u64)> = cards.iter().map(cell).collect();
    assert_eq!(cells, vec![(0, 0), (0, 2), (0, 3), (1, 2), (2, 0), (2, 2), (3, 0)]);
}

#[test]
fn test_placements_width_selects_breakpoint() {
    let report = placements(&["--width", "375"]);
    assert_eq!(report["breakpoint"], "base");
    assert_eq!(report["columns"], 1);
    for (i, card) in report["cards"].as_array().unwrap().iter().enumerate() {
        assert_eq!(cell(card), (i as u64, 0));
    }
}

#[test]
fn test_unknown_breakpoint_rejected() {
    cli_cmd()
        .args(["--placements", "--breakpoint", "xxl"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("xxl"));
}

// ============================================================================
// Launch Tests
// ============================================================================

#[cfg(not(feature = "desktop"))]
#[test]
fn test_headless_build_cannot_open_window() {
    cli_cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("desktop"));
}
