//! CLI integration tests for the maze solver
//!
//! These tests exercise the complete workflow from maze file to solution
//! file, ensuring the commands and their error reporting work together.

use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Get a command instance for the maze binary
fn maze_cmd() -> assert_cmd::Command {
    assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("maze"))
}

/// Write a maze file into the test directory
fn write_maze(dir: &TempDir, name: &str, rows: &[&str]) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, rows.join("\n")).unwrap();
    path
}

// =============================================================================
// Solve Tests
// =============================================================================

#[test]
fn test_solve_prints_grid_then_path() {
    let dir = TempDir::new().unwrap();
    let input = write_maze(&dir, "maze.txt", &["100", "080", "089"]);

    maze_cmd()
        .arg("solve")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("100\n080\n089"))
        .stdout(predicate::str::contains(
            "The path through the maze is as follows:",
        ))
        .stdout(predicate::str::contains(
            "(0, 0) (0, 1) (0, 2) (1, 2) (2, 2)",
        ));
}

#[test]
fn test_solve_writes_solution_file() {
    let dir = TempDir::new().unwrap();
    let input = write_maze(&dir, "maze.txt", &["100", "080", "089"]);
    let out = dir.path().join("maze_output.txt");

    maze_cmd()
        .arg("solve")
        .arg(&input)
        .arg("--output")
        .arg(&out)
        .assert()
        .success();

    let content = fs::read_to_string(&out).unwrap();
    assert_eq!(
        content,
        "The path through the maze is as follows:\n(0, 0) (0, 1) (0, 2) (1, 2) (2, 2) "
    );
}

#[test]
fn test_unsolvable_maze_is_not_an_error() {
    let dir = TempDir::new().unwrap();
    let input = write_maze(&dir, "maze.txt", &["1", "8", "8"]);
    let out = dir.path().join("maze_output.txt");

    maze_cmd()
        .arg("solve")
        .arg(&input)
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("No path from start to finish."));

    // The solution file gets the header line and no coordinate tokens.
    let content = fs::read_to_string(&out).unwrap();
    assert_eq!(content, "The path through the maze is as follows:\n");
}

#[test]
fn test_solve_json_output() {
    let dir = TempDir::new().unwrap();
    let input = write_maze(&dir, "maze.txt", &["100", "080", "089"]);

    let output = maze_cmd()
        .arg("solve")
        .arg(&input)
        .args(["--format", "json"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();

    assert_eq!(json["solved"], true);
    let path = json["path"].as_array().unwrap();
    assert_eq!(path.len(), 5);
    assert_eq!(path[0]["row"], 0);
    assert_eq!(path[0]["col"], 0);
    assert_eq!(path[0]["status"], "start");
    assert_eq!(path[4]["status"], "finish");
}

#[test]
fn test_solve_verbose_diagnostics() {
    let dir = TempDir::new().unwrap();
    let input = write_maze(&dir, "maze.txt", &["19"]);

    maze_cmd()
        .arg("solve")
        .arg(&input)
        .arg("--verbose")
        .assert()
        .success()
        .stderr(predicate::str::contains("[verbose:solve] Loaded 1x2 grid"));
}

// =============================================================================
// Validation Tests
// =============================================================================

#[test]
fn test_missing_file_fails() {
    maze_cmd()
        .arg("solve")
        .arg("/nonexistent/maze.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read maze file"));
}

#[test]
fn test_ragged_grid_fails() {
    let dir = TempDir::new().unwrap();
    let input = write_maze(&dir, "maze.txt", &["100", "08", "089"]);

    maze_cmd()
        .arg("solve")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Row 1 has 2 columns, expected 3"));
}

#[test]
fn test_expect_dimension_mismatch_fails() {
    let dir = TempDir::new().unwrap();
    let input = write_maze(&dir, "maze.txt", &["100", "080", "089"]);

    maze_cmd()
        .arg("solve")
        .arg(&input)
        .args(["--expect", "8x8"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Grid is 3x3, expected 8x8"));
}

#[test]
fn test_expect_matching_dimensions_succeeds() {
    let dir = TempDir::new().unwrap();
    let input = write_maze(&dir, "maze.txt", &["100", "080", "089"]);

    maze_cmd()
        .arg("solve")
        .arg(&input)
        .args(["--expect", "3x3"])
        .assert()
        .success();
}

#[test]
fn test_no_start_fails() {
    let dir = TempDir::new().unwrap();
    let input = write_maze(&dir, "maze.txt", &["000", "089"]);

    maze_cmd()
        .arg("solve")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no start symbol"));
}

#[test]
fn test_invalid_symbol_warns_but_solves() {
    let dir = TempDir::new().unwrap();
    let input = write_maze(&dir, "maze.txt", &["1x0", "000", "809"]);

    maze_cmd()
        .arg("solve")
        .arg(&input)
        .assert()
        .success()
        .stderr(predicate::str::contains("Invalid symbol 'x' at (0, 1)"));
}

// =============================================================================
// Show Tests
// =============================================================================

#[test]
fn test_show_renders_grid() {
    let dir = TempDir::new().unwrap();
    let input = write_maze(&dir, "maze.txt", &["100", "080", "089"]);

    maze_cmd()
        .arg("show")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::diff("100\n080\n089\n"));
}

#[test]
fn test_show_json_output() {
    let dir = TempDir::new().unwrap();
    let input = write_maze(&dir, "maze.txt", &["19"]);

    let output = maze_cmd()
        .arg("show")
        .arg(&input)
        .args(["--format", "json"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(json["rows"], 1);
    assert_eq!(json["cols"], 2);
    assert_eq!(json["grid"][0], "19");
}
