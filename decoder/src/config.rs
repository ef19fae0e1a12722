use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use taskcfg_core::{DecodeOptions, PaddingMode, Validation};

/// Logger configuration used by the decoder.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    pub level_filter: LevelFilter,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self { level_filter: LevelFilter::Warn }
    }
}

impl LoggerConfig {
    /// Raise the level one step per `-v`.
    pub fn with_verbosity(&self, verbose: u8) -> LevelFilter {
        let levels = [
            LevelFilter::Off,
            LevelFilter::Error,
            LevelFilter::Warn,
            LevelFilter::Info,
            LevelFilter::Debug,
            LevelFilter::Trace,
        ];
        let current = levels.iter().position(|l| *l == self.level_filter).unwrap_or(2);
        levels[(current + verbose as usize).min(levels.len() - 1)]
    }
}

#[derive(ValueEnum, Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Yaml,
    Json,
}

/// Settings read from `--config`. Every key is optional.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct DecoderConfig {
    pub padding: PaddingMode,
    pub validation: Validation,
    pub format: OutputFormat,
    pub logger: LoggerConfig,
}

impl DecoderConfig {
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config_str = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        Self::from_toml(&config_str).with_context(|| format!("parse config {}", path.display()))
    }

    pub fn from_toml(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn decode_options(&self) -> DecodeOptions {
        DecodeOptions { padding: self.padding, validation: self.validation }
    }
}
