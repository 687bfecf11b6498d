//! CLI integration tests
//!
//! Drives the `anvil` binary with assert_cmd against generated workbooks.

use anvil::excel::Document;
use anvil::types::Grid;
use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

/// Linear test record: modulus 200, max stress 60, every strain sample under
/// the default 40% cutoff.
fn linear_record() -> Grid {
    let mut grid = Grid::new();
    grid.set_text(1, 1, "Length, L");
    grid.set_text(1, 2, "Width, W");
    grid.set_text(1, 3, "Thickness, T");
    grid.set_number(3, 1, 10.0);
    grid.set_number(3, 2, 5.0);
    grid.set_number(3, 3, 2.0);
    grid.set_text(5, 1, "Force");
    grid.set_text(5, 2, "Stroke");
    grid.set_text(5, 4, "Stress");
    grid.set_text(5, 5, "Strain");
    grid.set_text(1, 7, "Maximum Stress, σc");
    grid.set_text(1, 8, "Comp. Modulus, Ec");
    grid.set_text(1, 9, "Energy up to 40% Strain, E0.40");
    for i in 1..=60u32 {
        grid.set_number(5 + i, 1, i as f64 * 50.0);
        grid.set_number(5 + i, 2, i as f64 * 0.0001);
    }
    grid
}

fn write_record(dir: &TempDir, name: &str, grid: Grid) -> PathBuf {
    let path = dir.path().join(name);
    Document {
        sheet_name: "Sheet1".to_string(),
        grid,
    }
    .save(&path)
    .expect("record should save");
    path
}

// ═══════════════════════════════════════════════════════════════════════════
// HELP AND VERSION TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("anvil").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("anvil"))
        .stdout(predicate::str::contains("Compression test analysis"));
}

#[test]
fn test_cli_version() {
    let mut cmd = Command::cargo_bin("anvil").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("anvil"));
}

#[test]
fn test_analyze_help() {
    let mut cmd = Command::cargo_bin("anvil").unwrap();
    cmd.args(["analyze", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("full analysis pipeline"));
}

#[test]
fn test_derive_help() {
    let mut cmd = Command::cargo_bin("anvil").unwrap();
    cmd.args(["derive", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("stress/strain columns only"));
}

// ═══════════════════════════════════════════════════════════════════════════
// ANALYZE
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_analyze_full_record() {
    let dir = TempDir::new().unwrap();
    let record = write_record(&dir, "specimen.xlsx", linear_record());

    let mut cmd = Command::cargo_bin("anvil").unwrap();
    cmd.arg("analyze")
        .arg(&record)
        .assert()
        .success()
        .stdout(predicate::str::contains("Maximum stress: 60 MPa"))
        .stdout(predicate::str::contains("Compression modulus: 200 MPa"))
        .stdout(predicate::str::contains("Analysis complete"));

    assert!(dir.path().join("updated_specimen.xlsx").exists());
}

#[test]
fn test_analyze_no_chart() {
    let dir = TempDir::new().unwrap();
    let record = write_record(&dir, "specimen.xlsx", linear_record());

    let mut cmd = Command::cargo_bin("anvil").unwrap();
    cmd.args(["analyze", "--no-chart"])
        .arg(&record)
        .assert()
        .success()
        .stdout(predicate::str::contains("Chart skipped"));
}

#[test]
fn test_analyze_missing_file() {
    let mut cmd = Command::cargo_bin("anvil").unwrap();
    cmd.args(["analyze", "no-such-record.xlsx"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no-such-record.xlsx"));
}

#[test]
fn test_analyze_missing_geometry_label() {
    let dir = TempDir::new().unwrap();
    let mut grid = linear_record();
    grid.set_text(1, 1, "unlabeled");
    let record = write_record(&dir, "specimen.xlsx", grid);

    let mut cmd = Command::cargo_bin("anvil").unwrap();
    cmd.arg("analyze")
        .arg(&record)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Length, L"));
}

#[test]
fn test_analyze_unmatched_energy_threshold() {
    let dir = TempDir::new().unwrap();
    let record = write_record(&dir, "specimen.xlsx", linear_record());

    let mut cmd = Command::cargo_bin("anvil").unwrap();
    cmd.args(["analyze", "--threshold", "35"])
        .arg(&record)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Energy up to 35% Strain"));

    // The stages before the failing one already persisted their results
    assert!(dir.path().join("updated_specimen.xlsx").exists());
}

// ═══════════════════════════════════════════════════════════════════════════
// DERIVE
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_derive_writes_updated_copy() {
    let dir = TempDir::new().unwrap();
    let record = write_record(&dir, "specimen.xlsx", linear_record());

    let mut cmd = Command::cargo_bin("anvil").unwrap();
    cmd.arg("derive")
        .arg(&record)
        .assert()
        .success()
        .stdout(predicate::str::contains("60 stress / 60 strain samples"))
        .stdout(predicate::str::contains("Curve written"));

    assert!(dir.path().join("updated_specimen.xlsx").exists());
}
