//! Genesis configuration with TOML file support.

use meridian_types::{ConsensusParams, Height};
use meridian_utils::LogFormat;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("invalid TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("cannot render TOML: {0}")]
    Render(#[from] toml::ser::Error),
}

/// Chain-start settings supplied by the operator.
///
/// Any consensus-params sub-group left out of the file takes its default
/// value. Sub-groups that are given must be complete.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenesisConfig {
    #[serde(default = "default_chain_id")]
    pub chain_id: String,

    #[serde(default = "default_initial_height")]
    pub initial_height: Height,

    /// Log format: "human" or "json".
    #[serde(default)]
    pub log_format: LogFormat,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub consensus_params: ConsensusParams,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_chain_id() -> String {
    "meridian-devnet".to_string()
}

fn default_initial_height() -> Height {
    Height::INITIAL
}

fn default_log_level() -> String {
    "info".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

pub(crate) fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })
}

impl GenesisConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        Self::from_toml_str(&read_file(path)?)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// The height to evaluate at: `height` when given, else the chain's
    /// initial height.
    pub fn height_or_initial(&self, height: Option<i64>) -> i64 {
        height.unwrap_or_else(|| self.initial_height.value())
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

impl Default for GenesisConfig {
    fn default() -> Self {
        Self {
            chain_id: default_chain_id(),
            initial_height: default_initial_height(),
            log_format: LogFormat::default(),
            log_level: default_log_level(),
            consensus_params: ConsensusParams::defaults(),
        }
    }
}
