#![allow(deprecated)]

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;

const RANGE_MESSAGE: &str = "Wrong number range. It should be in [1000, 9999].\n";

fn digit_mirror() -> Command {
    Command::cargo_bin("digit-mirror").unwrap()
}

#[test]
fn test_palindromes_print_yes() -> Result<()> {
    for input in ["1221", "1001", "9999", "4554\n"] {
        digit_mirror()
            .write_stdin(input)
            .assert()
            .success()
            .stdout("yes\n");
    }
    Ok(())
}

#[test]
fn test_non_palindrome_prints_no() -> Result<()> {
    for input in ["1234", "1000"] {
        digit_mirror()
            .write_stdin(input)
            .assert()
            .success()
            .stdout("no\n");
    }
    Ok(())
}

#[test]
fn test_out_of_range_exits_one() -> Result<()> {
    for input in ["999", "10000", "-1221", "0", "99999999999999999999999"] {
        digit_mirror()
            .write_stdin(input)
            .assert()
            .code(1)
            .stdout(RANGE_MESSAGE);
    }
    Ok(())
}

#[test]
fn test_malformed_input_exits_two() -> Result<()> {
    for input in ["abc", "", "   \n", "12a1"] {
        digit_mirror()
            .write_stdin(input)
            .assert()
            .code(2)
            .stdout("Wrong input. It should be a single integer.\n");
    }
    Ok(())
}

#[test]
fn test_same_input_same_output() -> Result<()> {
    let first = digit_mirror().write_stdin("7337").output()?;
    let second = digit_mirror().write_stdin("7337").output()?;
    assert_eq!(first.stdout, second.stdout);
    assert_eq!(first.status.code(), second.status.code());
    Ok(())
}

#[test]
fn test_verbose_keeps_stdout_to_one_line() -> Result<()> {
    digit_mirror()
        .arg("--verbose")
        .env_remove("RUST_LOG")
        .write_stdin("1221")
        .assert()
        .success()
        .stdout("yes\n")
        .stderr(predicate::str::contains("Checked"));
    Ok(())
}

#[test]
fn test_positional_argument_is_rejected() -> Result<()> {
    digit_mirror()
        .arg("1221")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
    Ok(())
}
