use std::path::PathBuf;

use clap::Parser;

use hitscope::config::{ConfigError, DashboardConfig};

#[derive(Parser, Debug)]
#[command(name = "hitscope", about = "Explore trends in popular songs 2010-2019")]
pub struct Cli {
    /// Song table to open (.csv, .json or .parquet). Overrides the config.
    pub data: Option<PathBuf>,

    /// JSON config file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Seed for generated sample data.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Start with generated sample data instead of reading a file.
    #[arg(long)]
    pub synthetic: bool,
}

impl Cli {
    /// Config file (if any) with command-line overrides applied.
    pub fn resolve_config(&self) -> Result<DashboardConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => DashboardConfig::from_file(path)?,
            None => DashboardConfig::default(),
        };
        if let Some(data) = &self.data {
            config.data_path = data.clone();
        }
        if let Some(seed) = self.seed {
            config.synthetic_seed = seed;
        }
        Ok(config)
    }
}
