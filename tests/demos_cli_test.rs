use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn critical_reduction_reports_the_total() {
    Command::new(env!("CARGO_BIN_EXE_critical_reduction"))
        .assert()
        .success()
        .stdout(predicate::str::contains("total sum: 45"))
        .stdout(predicate::str::contains("local_sum"));
}

#[test]
fn vector_add_emits_per_index_lines() {
    let first = predicate::str::contains("calculating C[0] = A[0] + B[0]");
    let last = predicate::str::contains("calculating C[7] = A[7] + B[7]");
    let out_of_range = predicate::str::contains("C[8]").not();

    Command::new(env!("CARGO_BIN_EXE_vector_add"))
        .assert()
        .success()
        .stdout(first)
        .stdout(last)
        .stdout(out_of_range);
}

// The full sweep is the O(n^2) baseline and takes minutes at the upper
// bound, so it is opt-in.
#[test]
#[ignore = "runs the full serial sweep up to 500000"]
fn prime_sweep_runs_both_configurations() {
    Command::new(env!("CARGO_BIN_EXE_prime_sweep"))
        .assert()
        .success()
        .stdout(predicate::str::contains("131072"))
        .stdout(predicate::str::contains("Normal end of execution."));
}
