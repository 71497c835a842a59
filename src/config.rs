//! Configuration management for Safechat
//!
//! This module handles loading, parsing, and validating configuration
//! from a YAML file, falling back to built-in defaults when no file exists.

use crate::error::{Result, SafechatError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure for Safechat
///
/// Holds provider settings for the completion endpoint and chat
/// presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Provider configuration for the completion endpoint
    #[serde(default)]
    pub provider: ProviderConfig,

    /// Chat presentation configuration
    #[serde(default)]
    pub chat: ChatConfig,
}

/// Provider configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProviderConfig {
    /// OpenRouter configuration
    #[serde(default)]
    pub openrouter: OpenRouterConfig,
}

/// OpenRouter provider configuration
///
/// The API key is deliberately not part of the configuration file; it is
/// read from the `OPENAI_API_KEY` environment variable at call time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenRouterConfig {
    /// Base URL for OpenRouter endpoints (useful for tests and local mocks)
    ///
    /// The completion endpoint is built as `{api_base}/chat/completions`,
    /// which allows tests to point the provider at a mock server.
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Model identifier sent with every completion request
    #[serde(default = "default_model")]
    pub model: String,

    /// Value for the `HTTP-Referer` identification header
    #[serde(default = "default_referer")]
    pub referer: String,

    /// Value for the `X-Title` identification header
    #[serde(default = "default_app_title")]
    pub app_title: String,
}

fn default_api_base() -> String {
    "https://openrouter.ai/api/v1".to_string()
}

fn default_model() -> String {
    "moonshotai/kimi-dev-72b:free".to_string()
}

fn default_referer() -> String {
    "https://github.com/safechat/safechat".to_string()
}

fn default_app_title() -> String {
    "Safechat".to_string()
}

impl Default for OpenRouterConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            model: default_model(),
            referer: default_referer(),
            app_title: default_app_title(),
        }
    }
}

/// Chat presentation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Show per-message timestamps in the transcript
    #[serde(default = "default_show_timestamps")]
    pub show_timestamps: bool,
}

fn default_show_timestamps() -> bool {
    true
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            show_timestamps: default_show_timestamps(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    ///
    /// Falls back to built-in defaults when the file does not exist, so a
    /// fresh checkout runs without any configuration step.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration file
    ///
    /// # Errors
    ///
    /// Returns error if the file exists but cannot be read or parsed
    ///
    /// # Examples
    ///
    /// ```
    /// use safechat::config::Config;
    ///
    /// let config = Config::load("does/not/exist.yaml").unwrap();
    /// assert_eq!(config.provider.openrouter.model, "moonshotai/kimi-dev-72b:free");
    /// ```
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)
            .map_err(|e| SafechatError::Config(format!("Failed to read {}: {}", path.display(), e)))?;
        let config: Config = serde_yaml::from_str(&contents)?;
        tracing::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// Checks structural validity only. The API credential is intentionally
    /// not checked here; its absence surfaces when a completion is attempted.
    ///
    /// # Errors
    ///
    /// Returns error if the model name is empty or the API base is not an
    /// HTTP(S) URL
    pub fn validate(&self) -> Result<()> {
        let or = &self.provider.openrouter;

        if or.model.trim().is_empty() {
            return Err(SafechatError::Config("model must not be empty".to_string()).into());
        }

        if !or.api_base.starts_with("http://") && !or.api_base.starts_with("https://") {
            return Err(SafechatError::Config(format!(
                "api_base must be an HTTP(S) URL, got: {}",
                or.api_base
            ))
            .into());
        }

        Ok(())
    }
}
