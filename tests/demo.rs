//! Runs the `bst-demo` binary end to end and checks what the shell sees.

use std::process::{Command, Output};

fn bst_demo(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_bst-demo"))
        .args(args)
        .env_remove("BST_DEMO_SEED")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run bst-demo")
}

#[test]
fn seeded_run_succeeds() {
    let output = bst_demo(&["--seed", "3", "-n", "15"]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("Balanced: true\nLevel order:\n"));
    assert!(stdout.contains("Insert 130\n"));
    assert!(stdout.contains("Rebalancing...\nBalanced: true\n"));
}

#[test]
fn empty_range_exits_with_usage_code() {
    let output = bst_demo(&["--min", "10", "--max", "1"]);

    assert_eq!(output.status.code(), Some(64));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Error: invalid value range: min 10 is greater than max 1"));
}

#[test]
fn unknown_flag_is_rejected_by_the_parser() {
    let output = bst_demo(&["--no-such-flag"]);

    assert_eq!(output.status.code(), Some(2));
}
