//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use cardsmith_extractor::ExtractorConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
///
/// API keys are read from the environment, never from this file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// LLM provider settings
    #[serde(default)]
    pub provider: ProviderConfig,

    /// Generation settings
    #[serde(default)]
    pub extractor: ExtractorConfig,

    /// Mochi export settings
    #[serde(default)]
    pub mochi: MochiConfig,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

/// LLM provider settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Model name
    #[serde(default = "default_model")]
    pub model: String,

    /// API endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Response token limit
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// HTTP timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Mochi export settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MochiConfig {
    /// API base URL
    #[serde(default = "default_mochi_url")]
    pub base_url: String,
}

/// Global CLI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default)]
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".cardsmith").join("config.toml"))
    }

    /// Load configuration from `path`, or defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config
            .extractor
            .validate()
            .map_err(|e| CliError::Config(e.to_string()))?;
        Ok(config)
    }

    /// Save configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Render as TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            endpoint: default_endpoint(),
            max_tokens: default_max_tokens(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for MochiConfig {
    fn default() -> Self {
        Self {
            base_url: default_mochi_url(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::default(),
        }
    }
}

fn default_model() -> String {
    cardsmith_llm::DEFAULT_MODEL.to_string()
}

fn default_endpoint() -> String {
    cardsmith_llm::DEFAULT_ENDPOINT.to_string()
}

fn default_max_tokens() -> u32 {
    cardsmith_llm::DEFAULT_MAX_TOKENS
}

fn default_timeout_secs() -> u64 {
    cardsmith_llm::DEFAULT_TIMEOUT_SECS
}

fn default_mochi_url() -> String {
    cardsmith_mochi::DEFAULT_BASE_URL.to_string()
}

fn default_true() -> bool {
    true
}
