pub mod framework;
pub mod probe;
pub mod suite;

pub use framework::{
    CoverageOptions, CoverageReport, FrameworkError, PytestFramework, RunOptions, RunTarget,
    TestFramework,
};
pub use probe::{
    probe_with_provider, run_probe, run_probe_with, ProbeFailure, ProbeOutcome, PROBE_MAX_TOKENS,
    PROBE_PROMPT,
};
pub use suite::{
    resolve_test_file, run_all, run_single, run_with_coverage, SuiteConfig, SuiteConfigError,
    DEFAULT_TEST_FILES,
};
