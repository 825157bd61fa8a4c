use std::process::{Command, Output};

use pretty_assertions::assert_eq;

fn frosting(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_frosting")).args(args)
                                                .output()
                                                .expect("failed to start frosting")
}

#[test]
fn runs_a_script_file() {
    let output = frosting(&["tests/scripts/overview.fro"]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout),
               "y is 20\n0\n1\n2\n3\n4\n5\n5\n");
}

#[test]
fn missing_script_is_reported() {
    let output = frosting(&["tests/fixtures/missing.fro"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("Perhaps this file does not exist?"), "stderr: {stderr}");
}

#[test]
fn non_utf8_script_is_not_reported_as_missing() {
    let output = frosting(&["tests/fixtures/latin1.fro"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("is not valid UTF-8"), "stderr: {stderr}");
    assert!(!stderr.contains("does not exist"), "stderr: {stderr}");
    assert!(output.stdout.is_empty());
}
