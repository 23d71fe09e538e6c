use clap::Parser;
use qa_harness::framework::PytestFramework;
use qa_harness::suite::{run_all, run_single, run_with_coverage, SuiteConfig};
use std::path::PathBuf;
use tracing::{error, warn};

#[derive(Parser)]
#[command(name = "run-tests")]
#[command(about = "Run the campfires multimodal test suite")]
struct Cli {
    /// "coverage", a test name (with or without the test_ prefix), or
    /// nothing to run the full suite
    command: Option<String>,

    /// Extra positional arguments are accepted and ignored; only the first
    /// selects the mode
    #[arg(hide = true)]
    rest: Vec<String>,

    /// TOML file overriding the suite configuration
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if !cli.rest.is_empty() {
        warn!("Ignoring extra arguments: {:?}", cli.rest);
    }

    let config = match &cli.config {
        Some(path) => match SuiteConfig::from_toml_file(path) {
            Ok(config) => config,
            Err(e) => {
                error!("{}", e);
                eprintln!("Could not load suite configuration: {}", e);
                std::process::exit(1);
            }
        },
        None => SuiteConfig::default(),
    };

    let framework = PytestFramework::new();

    let exit_code = match cli.command.as_deref() {
        Some("coverage") => run_with_coverage(&framework, &config),
        Some(name) => run_single(&framework, &config, name),
        None => run_all(&framework, &config),
    };

    std::process::exit(exit_code);
}
