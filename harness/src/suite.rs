use crate::framework::{CoverageOptions, CoverageReport, RunOptions, RunTarget, TestFramework};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{error, warn};

/// Default suite, in the order the files are evaluated. The order matters:
/// the full-suite run is fail-fast, so partial-failure logs name the first
/// file in this sequence that broke.
pub const DEFAULT_TEST_FILES: [&str; 6] = [
    "test_multimodal_torch.py",
    "test_multimodal_openrouter.py",
    "test_audio_processing.py",
    "test_metadata_extractor.py",
    "test_multimodal_local_driver.py",
    "test_multimodal_prompts.py",
];

#[derive(Error, Debug)]
pub enum SuiteConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SuiteConfig {
    pub test_dir: PathBuf,
    /// Ordered list of test files for the full-suite run.
    pub test_files: Vec<String>,
    pub coverage_package: String,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            test_dir: PathBuf::from("tests"),
            test_files: DEFAULT_TEST_FILES.iter().map(|s| s.to_string()).collect(),
            coverage_package: "campfires".to_string(),
        }
    }
}

impl SuiteConfig {
    pub fn from_toml_file(path: &Path) -> Result<Self, SuiteConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| SuiteConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| SuiteConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn with_test_dir(mut self, test_dir: impl Into<PathBuf>) -> Self {
        self.test_dir = test_dir.into();
        self
    }

    pub fn with_test_files(mut self, test_files: Vec<String>) -> Self {
        self.test_files = test_files;
        self
    }
}

/// Normalizes a test name to its file name: an optional leading `test_` is
/// stripped before the prefix and extension are applied, so
/// `audio_processing` and `test_audio_processing` resolve identically.
pub fn resolve_test_file(name: &str) -> String {
    let stem = name.strip_prefix("test_").unwrap_or(name);
    format!("test_{}.py", stem)
}

/// Runs the configured files in order, fail-fast: the first nonzero exit
/// code is returned and the remaining files are never invoked. Missing
/// files are skipped with a warning.
pub fn run_all(framework: &dyn TestFramework, config: &SuiteConfig) -> i32 {
    println!("Running campfires multimodal tests");
    println!("{}", "=".repeat(50));

    for test_file in &config.test_files {
        let test_path = config.test_dir.join(test_file);
        if !test_path.exists() {
            warn!("Test file {} not found", test_file);
            println!("  Test file {} not found, skipping", test_file);
            continue;
        }

        println!("\nRunning {}...", test_file);
        match framework.run(&RunTarget::File(test_path), &RunOptions::verbose()) {
            Ok(0) => println!("  All tests passed in {}", test_file),
            Ok(code) => {
                println!("  Tests failed in {}", test_file);
                return code;
            }
            Err(e) => {
                error!("Could not run {}: {}", test_file, e);
                return 1;
            }
        }
    }

    println!("\n{}", "=".repeat(50));
    println!("All multimodal tests completed successfully");
    0
}

/// Runs one test file by name. Returns 1 without invoking the framework
/// when the resolved file does not exist.
pub fn run_single(framework: &dyn TestFramework, config: &SuiteConfig, name: &str) -> i32 {
    let test_file = resolve_test_file(name);
    let test_path = config.test_dir.join(&test_file);

    if !test_path.exists() {
        println!("Test file {} not found", test_file);
        return 1;
    }

    println!("Running {}...", test_file);
    match framework.run(&RunTarget::File(test_path), &RunOptions::verbose()) {
        Ok(0) => {
            println!("All tests passed in {}", test_file);
            0
        }
        Ok(code) => {
            println!("Tests failed in {}", test_file);
            code
        }
        Err(e) => {
            error!("Could not run {}: {}", test_file, e);
            1
        }
    }
}

/// One framework invocation against the whole test directory with coverage
/// instrumentation; the exit code is passed through verbatim.
pub fn run_with_coverage(framework: &dyn TestFramework, config: &SuiteConfig) -> i32 {
    println!("Running tests with coverage...");

    let options = RunOptions::verbose().with_coverage(CoverageOptions {
        package: config.coverage_package.clone(),
        reports: vec![CoverageReport::Html, CoverageReport::TermMissing],
    });

    match framework.run(&RunTarget::Directory(config.test_dir.clone()), &options) {
        Ok(0) => {
            println!("All tests passed with coverage report generated");
            0
        }
        Ok(code) => {
            println!("Some tests failed");
            code
        }
        Err(e) => {
            error!("Could not run coverage: {}", e);
            1
        }
    }
}
