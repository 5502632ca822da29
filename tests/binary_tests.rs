//! End-to-end test for the aggregator binary

use std::process::Command;

/// Both bundled suites pass, so the process must exit with status 0.
#[test]
fn test_binary_exits_with_aggregate_status() {
    let output = Command::new(env!("CARGO_BIN_EXE_ctest-aggregate"))
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to spawn ctest-aggregate");

    assert_eq!(
        output.status.code(),
        Some(0),
        "stdout:\n{}\nstderr:\n{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
}

/// Both suites print libtest output; the ignored check is reported, not run.
#[test]
fn test_binary_runs_both_suites() {
    let output = Command::new(env!("CARGO_BIN_EXE_ctest-aggregate"))
        .output()
        .expect("failed to spawn ctest-aggregate");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("add::it_works"), "stdout:\n{}", stdout);
    assert!(stdout.contains("multiply::positive"), "stdout:\n{}", stdout);
    assert!(stdout.contains("1 ignored"), "stdout:\n{}", stdout);
}
