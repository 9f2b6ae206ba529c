//! Configuration handling for the dotplot CLI
//!
//! Supports loading configuration from dotplot.toml files with CLI argument overrides.

use anyhow::{Context, Result};
use dotplot_core::{DotParams, WindowBoundary};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::CliError;
use crate::output::OutputFormat;

/// File looked up in the working directory when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "dotplot.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub encode: EncodeConfig,
    #[serde(default)]
    pub matching: MatchingConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub random: RandomConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Seed for random sequence generation; entropy-seeded when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncodeConfig {
    /// Default k-mer size
    #[serde(default = "default_k")]
    pub k: usize,

    /// Window count convention ("drop-last" or "inclusive")
    #[serde(default)]
    pub boundary: WindowBoundary,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// Drop k-mers occurring more often than this
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_occurrences: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Coordinate output format ("tsv" or "json")
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomConfig {
    /// Length of the first random sequence
    #[serde(default = "default_len_a")]
    pub len_a: usize,

    /// Length of the second random sequence
    #[serde(default = "default_len_b")]
    pub len_b: usize,

    /// Symbols random sequences are drawn from
    #[serde(default = "default_symbols")]
    pub symbols: String,
}

// Default value functions
fn default_k() -> usize { 4 }
fn default_len_a() -> usize { 1000 }
fn default_len_b() -> usize { 500 }
fn default_symbols() -> String { "ATCG".to_string() }

impl Default for EncodeConfig {
    fn default() -> Self {
        Self {
            k: default_k(),
            boundary: WindowBoundary::default(),
        }
    }
}

impl Default for RandomConfig {
    fn default() -> Self {
        Self {
            len_a: default_len_a(),
            len_b: default_len_b(),
            symbols: default_symbols(),
        }
    }
}

/// Values given on the command line that take precedence over the config file
#[derive(Debug, Clone, Default)]
pub struct PlotOverrides {
    pub k: Option<usize>,
    pub boundary: Option<WindowBoundary>,
    pub max_occurrences: Option<usize>,
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let config = match config_path {
            Some(path) => {
                log::info!("Loading configuration from: {}", path.display());
                Self::load_from_file(path)?
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    log::info!("Loading configuration from: {}", DEFAULT_CONFIG_FILE);
                    Self::load_from_file(&default_path)?
                } else {
                    log::debug!("Using default configuration");
                    Self::default()
                }
            }
        };

        Ok(config)
    }

    /// Load configuration from a specific TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .map_err(CliError::from)
            .with_context(|| format!("Failed to parse configuration file: {}", path.display()))?;

        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(CliError::from)
            .context("Failed to serialize configuration")?;

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write configuration file: {}", path.display()))?;

        Ok(())
    }

    /// Generate example configuration file content
    pub fn example_toml() -> Result<String> {
        toml::to_string_pretty(&Self::default())
            .map_err(CliError::from)
            .context("Failed to serialize default configuration")
    }

    /// Dot plot parameters from this configuration with CLI overrides applied
    pub fn plot_params(&self, overrides: &PlotOverrides) -> DotParams {
        DotParams {
            k: overrides.k.unwrap_or(self.encode.k),
            boundary: overrides.boundary.unwrap_or(self.encode.boundary),
            max_occurrences: overrides.max_occurrences.or(self.matching.max_occurrences),
        }
    }
}
