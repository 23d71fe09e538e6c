use std::path::{Path, PathBuf};
use std::process::Command;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum FrameworkError {
    #[error("failed to launch {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} terminated by a signal")]
    NoExitCode { program: String },
}

#[derive(Debug, Clone)]
pub enum RunTarget {
    File(PathBuf),
    Directory(PathBuf),
}

impl RunTarget {
    pub fn path(&self) -> &Path {
        match self {
            RunTarget::File(path) | RunTarget::Directory(path) => path,
        }
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, RunTarget::Directory(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoverageReport {
    Html,
    TermMissing,
}

impl CoverageReport {
    fn flag(&self) -> &'static str {
        match self {
            CoverageReport::Html => "html",
            CoverageReport::TermMissing => "term-missing",
        }
    }
}

#[derive(Debug, Clone)]
pub struct CoverageOptions {
    /// Package whose lines are instrumented (`--cov=<package>`).
    pub package: String,
    pub reports: Vec<CoverageReport>,
}

#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub verbose: bool,
    pub coverage: Option<CoverageOptions>,
}

impl RunOptions {
    pub fn verbose() -> Self {
        Self {
            verbose: true,
            coverage: None,
        }
    }

    pub fn with_coverage(mut self, coverage: CoverageOptions) -> Self {
        self.coverage = Some(coverage);
        self
    }
}

/// Seam for the external test-execution framework. Implementations return
/// the framework's raw exit code; they never interpret it.
pub trait TestFramework {
    fn run(&self, target: &RunTarget, options: &RunOptions) -> Result<i32, FrameworkError>;
}

/// Runs test files through pytest as a child process, blocking until it
/// exits.
pub struct PytestFramework {
    program: String,
}

impl PytestFramework {
    pub fn new() -> Self {
        Self::with_program("pytest")
    }

    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn build_args(target: &RunTarget, options: &RunOptions) -> Vec<String> {
        let mut args = vec![target.path().display().to_string()];

        if let Some(coverage) = &options.coverage {
            args.push(format!("--cov={}", coverage.package));
            for report in &coverage.reports {
                args.push(format!("--cov-report={}", report.flag()));
            }
        }

        if options.verbose {
            args.push("-v".to_string());
        }

        args
    }
}

impl Default for PytestFramework {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFramework for PytestFramework {
    fn run(&self, target: &RunTarget, options: &RunOptions) -> Result<i32, FrameworkError> {
        let args = Self::build_args(target, options);
        debug!("Invoking {} {}", self.program, args.join(" "));

        let status = Command::new(&self.program)
            .args(&args)
            .status()
            .map_err(|source| FrameworkError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        status.code().ok_or_else(|| FrameworkError::NoExitCode {
            program: self.program.clone(),
        })
    }
}
