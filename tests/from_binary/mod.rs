//! Integration tests running the actual crate binaries in a scratch directory: Test the full E2E path.

use std::path::Path;
use std::process::{Command, Output};

use bench_gen::{GeneratorConfig, Variant, write_tests};
use tempfile::tempdir;

#[test]
fn gtest_binary_writes_its_file() {
    run_and_compare(env!("CARGO_BIN_EXE_gen-gtest-test"), Variant::Gtest);
}

#[test]
fn lightest_binary_writes_its_file() {
    run_and_compare(env!("CARGO_BIN_EXE_gen-lightest-test"), Variant::Lightest);
}

#[test]
fn binary_fails_when_output_cannot_be_created() {
    let dir = tempdir().unwrap();
    // a directory squatting on the output file name makes File::create fail
    std::fs::create_dir(dir.path().join(Variant::Gtest.output_file_name())).unwrap();

    let output = run_in(env!("CARGO_BIN_EXE_gen-gtest-test"), dir.path());

    assert!(!output.status.success(), "binary should fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("gtest_test.cpp"),
        "diagnostic should name the output file, got: {stderr}"
    );
}

fn run_and_compare(binary: &str, variant: Variant) {
    let dir = tempdir().unwrap();

    let output = run_in(binary, dir.path());

    assert!(
        output.status.success(),
        "binary exited with non-zero status.\nstderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(output.stdout.is_empty(), "successful run prints nothing");

    let written = std::fs::read(dir.path().join(variant.output_file_name()))
        .expect("binary should create its output file");

    let mut expected = Vec::new();
    write_tests(&mut expected, &GeneratorConfig::for_variant(variant)).unwrap();
    assert_eq!(written, expected);

    let entries = std::fs::read_dir(dir.path()).unwrap().count();
    assert_eq!(entries, 1, "exactly one file is created");
}

fn run_in(binary: &str, dir: &Path) -> Output {
    Command::new(binary)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to execute binary")
}
