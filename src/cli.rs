//! Command-line interface components.

use crate::config::ProcessorConfig;
use crate::error::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "annuity-processor")]
#[command(about = "Validate an annuity renewal export and build the next-renewal-date correction workbook")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Fixed-width renewal export file
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Directory for the generated workbook
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Configuration file (defaults to <config dir>/annuity-processor/config.toml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Also write the deduplicated records to this Parquet file
    #[arg(long, value_name = "FILE")]
    pub records_parquet: Option<PathBuf>,

    /// Accept CRLF line endings by stripping the carriage return
    #[arg(long)]
    pub strip_cr: bool,

    /// Print the run result as JSON instead of coloured messages
    #[arg(long)]
    pub json: bool,

    /// Enable verbose logging
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Log level derived from the verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "info"
        }
    }

    /// Build the run configuration: defaults, then config file, then flags
    pub fn load_config(&self) -> Result<ProcessorConfig> {
        let default_path = match &self.config {
            Some(_) => None,
            None => ProcessorConfig::default_config_path()
                .ok()
                .filter(|path| path.exists()),
        };
        let config_file = self.config.as_deref().or(default_path.as_deref());

        match config_file {
            Some(path) => info!("Using config file: {}", path.display()),
            None => info!("No config file found, using defaults"),
        }

        let mut config = ProcessorConfig::load_layered(config_file)?;
        self.apply_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    /// Apply command-line overrides to `config`
    pub fn apply_overrides(&self, config: &mut ProcessorConfig) {
        if let Some(output_dir) = &self.output_dir {
            config.output_dir = output_dir.clone();
        }
        if let Some(path) = &self.records_parquet {
            config.records_parquet = Some(path.clone());
        }
        if self.strip_cr {
            config.strip_carriage_returns = true;
        }
    }
}
