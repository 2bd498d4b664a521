use anyhow::{Context, Result};
use invoke::BenchConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::cli::OutputFormat;

const APP_NAME: &str = "invoke-bench";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default output format
    pub default_output_format: OutputFormat,

    /// Calls per timed run
    pub iterations: u64,

    /// Number of timed runs averaged together
    pub average_over: u32,

    /// Integer argument passed to every call
    pub param: i64,

    /// Enable colored output
    pub colored_output: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        let bench = BenchConfig::default();
        Self {
            default_output_format: OutputFormat::Pretty,
            iterations: bench.iterations,
            average_over: bench.average_over,
            param: bench.param,
            colored_output: true,
        }
    }
}

impl AppConfig {
    /// Load configuration from file
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        match config_path {
            Some(path) => {
                if path.exists() {
                    let content = std::fs::read_to_string(path)
                        .context("Failed to read configuration file")?;
                    toml::from_str(&content).context("Failed to parse configuration file")
                } else {
                    Ok(Self::default())
                }
            }
            None => {
                // Use confy for default location
                confy::load(APP_NAME, None).context("Failed to load configuration")
            }
        }
    }

    /// Get default configuration file path
    pub fn default_config_path() -> Option<PathBuf> {
        confy::get_configuration_file_path(APP_NAME, None).ok()
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let toml_string =
            toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        std::fs::write(path, toml_string).context("Failed to write configuration file")?;

        Ok(())
    }

    /// Reset configuration to defaults and save
    pub fn reset(config_path: Option<&Path>) -> Result<()> {
        let path = config_path
            .map(|p| p.to_path_buf())
            .or_else(Self::default_config_path)
            .context("No configuration path available")?;

        Self::default().save(&path)
    }

    /// Show current configuration as a formatted string
    pub fn show(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration for display")
    }

    /// Bench settings from this configuration, with command-line overrides applied.
    pub fn bench_config(
        &self,
        iterations: Option<u64>,
        average_over: Option<u32>,
        param: Option<i64>,
    ) -> BenchConfig {
        BenchConfig::builder()
            .iterations(iterations.unwrap_or(self.iterations))
            .average_over(average_over.unwrap_or(self.average_over))
            .param(param.unwrap_or(self.param))
            .build()
    }
}
