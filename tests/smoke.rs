// Integration tests for the binary using assert_cmd.
// These tests shell out the compiled binary and validate observable behavior.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use predicates::str::contains;
use std::process::Command;

const BIN: &str = "langtons_ant";

fn white_rows(count: usize, width: usize) -> String {
    ("0 ".repeat(width) + "\n").repeat(count)
}

#[test]
fn default_run_logs_and_prints_grid() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin(BIN)?;

    cmd.assert()
        .success()
        .stdout(contains("Grid size: 10"))
        .stdout(contains("ant starting at row: 5, column: 5 and pointed Up"))
        .stdout(contains("End grid:\n"));

    Ok(())
}

#[test]
fn fatal_verbosity_gives_clean_grid() -> Result<(), Box<dyn std::error::Error>> {
    let mut expected = String::from("End grid:\n");
    expected.push_str(&white_rows(5, 10));
    expected.push_str("0 0 0 0 0 1 0 0 0 0 \n");
    expected.push_str(&white_rows(4, 10));

    let mut cmd = Command::cargo_bin(BIN)?;
    cmd.args(["-n", "1", "-v", "fatal"]);

    cmd.assert().success().stdout(expected);

    Ok(())
}

#[test]
fn debug_verbosity_traces_each_step() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin(BIN)?;
    cmd.args(["-n", "2", "-v", "debug"]);

    cmd.assert()
        .success()
        .stdout(contains("running iteration 2"))
        .stdout(contains("ant new position is at row: 6, column: 6 and pointed Down"))
        .stdout(contains("flipping cell at row 5 col 5"))
        .stdout(contains("flipping cell at row 5 col 6"));

    Ok(())
}

#[test]
fn growing_grid_is_rendered_whole() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin(BIN)?;
    cmd.args(["-s", "1", "-n", "1", "-v", "fatal"]);

    cmd.assert().success().stdout("End grid:\n1 0 \n");

    Ok(())
}

#[test]
fn color_flag_is_plain_when_piped() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin(BIN)?;
    cmd.args(["-s", "1", "-n", "1", "-v", "fatal", "--color"]);
    cmd.env_remove("CLICOLOR_FORCE");

    cmd.assert().success().stdout("End grid:\n1 0 \n");

    Ok(())
}

#[test]
fn invalid_verbosity_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin(BIN)?;
    cmd.args(["-v", "loud"]);

    cmd.assert()
        .failure()
        .stderr(contains("invalid debug level loud"));

    Ok(())
}

#[test]
fn non_positive_size_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin(BIN)?;
    cmd.args(["-s", "0"]);

    cmd.assert()
        .failure()
        .code(1)
        .stderr(contains("invalid grid size 0"))
        .stdout(contains("End grid:").not());

    Ok(())
}

#[test]
fn negative_iterations_are_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin(BIN)?;
    cmd.args(["-n", "-3"]);

    cmd.assert()
        .failure()
        .code(1)
        .stderr(contains("invalid number of iterations -3"));

    Ok(())
}
