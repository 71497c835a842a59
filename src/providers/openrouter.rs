//! OpenRouter provider implementation for Safechat
//!
//! This module implements the CompletionBackend trait against OpenRouter's
//! chat completions endpoint. One request per invocation, no retries; the
//! API key is read from the process environment at call time.

use crate::config::OpenRouterConfig;
use crate::error::{Result, SafechatError};
use crate::providers::CompletionBackend;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Environment variable holding the OpenRouter API key
///
/// Looked up on every completion call rather than at startup, so a missing
/// key surfaces as a call-time failure instead of blocking launch.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// OpenRouter API provider
///
/// Sends a single user message per request, identified by the configured
/// `HTTP-Referer` / `X-Title` header pair and a fixed model.
///
/// # Examples
///
/// ```no_run
/// use safechat::config::OpenRouterConfig;
/// use safechat::providers::{CompletionBackend, OpenRouterProvider};
///
/// # async fn example() -> safechat::error::Result<()> {
/// let provider = OpenRouterProvider::new(OpenRouterConfig::default())?;
/// let reply = provider.complete("Hello!").await?;
/// # Ok(())
/// # }
/// ```
pub struct OpenRouterProvider {
    client: Client,
    config: OpenRouterConfig,
}

/// Request body for the chat completions endpoint
#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatRequestMessage>,
}

/// Single message in the request payload
#[derive(Debug, Serialize)]
struct ChatRequestMessage {
    role: String,
    content: String,
}

/// Response body from the chat completions endpoint
#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

/// One completion choice
#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

/// Assistant message inside a choice
///
/// `content` stays an Option: a null or absent field means the service
/// returned no content, which is distinct from an empty string.
#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

impl OpenRouterProvider {
    /// Create a new OpenRouter provider instance
    ///
    /// # Arguments
    ///
    /// * `config` - OpenRouter configuration (api_base, model, headers)
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails
    ///
    /// # Examples
    ///
    /// ```
    /// use safechat::config::OpenRouterConfig;
    /// use safechat::providers::OpenRouterProvider;
    ///
    /// let provider = OpenRouterProvider::new(OpenRouterConfig::default());
    /// assert!(provider.is_ok());
    /// ```
    pub fn new(config: OpenRouterConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .user_agent("safechat/0.1.0")
            .build()
            .map_err(|e| SafechatError::Provider(format!("Failed to create HTTP client: {}", e)))?;

        tracing::info!(
            "Initialized OpenRouter provider: api_base={}, model={}",
            config.api_base,
            config.model
        );

        Ok(Self { client, config })
    }

    /// Get the configured model identifier
    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Read the API key from the process environment
    fn api_key(&self) -> Result<String> {
        std::env::var(API_KEY_ENV)
            .map_err(|_| SafechatError::MissingCredentials(API_KEY_ENV.to_string()).into())
    }
}

#[async_trait]
impl CompletionBackend for OpenRouterProvider {
    async fn complete(&self, user_message: &str) -> Result<Option<String>> {
        let api_key = self.api_key()?;
        let url = format!("{}/chat/completions", self.config.api_base);

        let request = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![ChatRequestMessage {
                role: "user".to_string(),
                content: user_message.to_string(),
            }],
        };

        tracing::debug!("Requesting completion from {}", url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .header("HTTP-Referer", &self.config.referer)
            .header("X-Title", &self.config.app_title)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("Completion request failed: {}", e);
                SafechatError::Provider(format!("Failed to reach completion endpoint: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Completion endpoint returned {}: {}", status, error_text);
            return Err(SafechatError::Provider(format!(
                "Completion endpoint returned {}: {}",
                status, error_text
            ))
            .into());
        }

        let parsed: ChatResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse completion response: {}", e);
            SafechatError::Provider(format!("Failed to parse completion response: {}", e))
        })?;

        Ok(parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content))
    }
}
