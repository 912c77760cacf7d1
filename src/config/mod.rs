pub mod file_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use file_config::FileConfig;
use serde::{Deserialize, Serialize};

/// Effective logging settings, resolved before the logger starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogSettings {
    pub verbose: bool,
    pub json: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "lane-deck")]
#[command(about = "Read-only dashboard service for shipping lanes")]
pub struct CliConfig {
    #[arg(long, default_value = "127.0.0.1:3000")]
    pub listen: String,

    #[arg(long, default_value = "data/lanes.json")]
    pub lanes_file: String,

    #[arg(long, default_value = "data/series.json")]
    pub series_file: String,

    #[arg(long, help = "Load settings from a TOML file instead of flags")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit JSON logs instead of the compact format")]
    pub json_logs: bool,
}

impl CliConfig {
    /// Combines the `[logging]` section of a loaded config file with the
    /// CLI flags. Flags act as overrides: either source can switch a
    /// setting on.
    pub fn log_settings(&self, file: Option<&FileConfig>) -> LogSettings {
        LogSettings {
            verbose: self.verbose || file.map(|f| f.verbose()).unwrap_or(false),
            json: self.json_logs || file.map(|f| f.json_logs()).unwrap_or(false),
        }
    }
}

impl ConfigProvider for CliConfig {
    fn listen_addr(&self) -> &str {
        &self.listen
    }

    fn lanes_file(&self) -> &str {
        &self.lanes_file
    }

    fn series_file(&self) -> &str {
        &self.series_file
    }

    fn verbose(&self) -> bool {
        self.verbose
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_listen_addr("listen", &self.listen)?;
        validation::validate_path("lanes_file", &self.lanes_file)?;
        validation::validate_path("series_file", &self.series_file)?;
        Ok(())
    }
}
