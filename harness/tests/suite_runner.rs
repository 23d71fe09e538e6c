//! End-to-end orchestrator runs against real child processes, standing in
//! for pytest with coreutils so no Python environment is required.

use qa_harness::framework::PytestFramework;
use qa_harness::suite::{run_all, run_single, run_with_coverage, SuiteConfig};
use std::fs::File;
use tempfile::TempDir;

fn suite_on_disk(files: &[&str]) -> (TempDir, SuiteConfig) {
    let dir = TempDir::new().unwrap();
    for file in files {
        File::create(dir.path().join(file)).unwrap();
    }
    let config = SuiteConfig::default()
        .with_test_dir(dir.path())
        .with_test_files(files.iter().map(|s| s.to_string()).collect());
    (dir, config)
}

#[test]
fn full_suite_passes_against_passing_framework() {
    let (_dir, config) = suite_on_disk(&["test_a.py", "test_b.py"]);
    let framework = PytestFramework::with_program("true");

    assert_eq!(run_all(&framework, &config), 0);
}

#[test]
fn full_suite_propagates_failing_framework_code() {
    let (_dir, config) = suite_on_disk(&["test_a.py", "test_b.py"]);
    let framework = PytestFramework::with_program("false");

    assert_eq!(run_all(&framework, &config), 1);
}

#[test]
fn single_file_runs_through_real_process() {
    let (_dir, config) = suite_on_disk(&["test_audio_processing.py"]);
    let framework = PytestFramework::with_program("true");

    assert_eq!(run_single(&framework, &config, "audio_processing"), 0);
    assert_eq!(run_single(&framework, &config, "test_audio_processing"), 0);
}

#[test]
fn single_missing_file_short_circuits_before_spawn() {
    let (_dir, config) = suite_on_disk(&[]);
    // A program that cannot spawn proves the framework is never reached.
    let framework = PytestFramework::with_program("definitely-not-a-real-test-framework");

    assert_eq!(run_single(&framework, &config, "audio_processing"), 1);
}

#[test]
fn coverage_mode_runs_once_against_directory() {
    let (_dir, config) = suite_on_disk(&["test_a.py"]);
    let framework = PytestFramework::with_program("true");

    assert_eq!(run_with_coverage(&framework, &config), 0);
}

#[test]
fn framework_spawn_failure_is_exit_code_one() {
    let (_dir, config) = suite_on_disk(&["test_a.py"]);
    let framework = PytestFramework::with_program("definitely-not-a-real-test-framework");

    assert_eq!(run_all(&framework, &config), 1);
}
