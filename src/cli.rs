//! Command-line surface and logging setup.

use std::path::PathBuf;

use clap::Parser;
use f8spacy_core::config::Config;
use f8spacy_core::pipeline::{self, RunOutcome};

#[derive(Debug, Parser)]
#[command(name = "f8spacy", about = "Figure eight to spacy")]
pub struct Cli {
    /// Contributor report (CSV), relative to the data directory.
    #[arg(short = 'r', long = "figure_eight_report")]
    pub figure_eight_report: PathBuf,

    /// Export bundle (zip), relative to the data directory.
    #[arg(short = 'd', long = "figure_eight_zip_file")]
    pub figure_eight_zip_file: PathBuf,

    /// Directory holding the inputs and receiving the outputs.
    /// Overrides `paths.data_dir` from the config file.
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Config file to use instead of ~/.config/f8spacy/config.toml.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log at debug level (RUST_LOG still wins when set).
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Layered config with command-line overrides applied.
    pub fn load_config(&self) -> f8spacy_core::Result<Config> {
        let mut config = Config::load(self.config.as_deref())?;
        if let Some(dir) = &self.data_dir {
            config.paths.data_dir = dir.clone();
        }
        Ok(config)
    }

    pub fn run(&self) -> f8spacy_core::Result<RunOutcome> {
        let config = self.load_config()?;
        let report = config.paths.resolve(&self.figure_eight_report);
        let archive = config.paths.resolve(&self.figure_eight_zip_file);
        tracing::debug!(
            report = %report.display(),
            archive = %archive.display(),
            data_dir = %config.paths.data_dir.display(),
            "resolved inputs"
        );
        pipeline::execute(&config, &report, &archive)
    }
}

/// Install the stderr subscriber. `RUST_LOG` overrides the level chosen here.
pub fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();
}
