//! Anthropic Provider Implementation
//!
//! Sends prompts to the Anthropic Messages API and hands back the raw
//! response body. The body is an envelope of typed content blocks; the
//! extraction pipeline unwraps it.
//!
//! # Examples
//!
//! ```no_run
//! use cardsmith_llm::AnthropicProvider;
//!
//! let provider = AnthropicProvider::new("sk-ant-...", "claude-3-5-sonnet-latest").unwrap();
//! ```

use crate::LlmError;
use cardsmith_domain::{LlmProvider, Prompt};
use reqwest::StatusCode;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, warn};

/// Default Anthropic API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.anthropic.com";

/// API version header value
pub const API_VERSION: &str = "2023-06-01";

/// Default model
pub const DEFAULT_MODEL: &str = "claude-3-5-sonnet-latest";

/// Default timeout for LLM requests (60 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Default response token limit
pub const DEFAULT_MAX_TOKENS: u32 = 4096;

/// Anthropic Messages API provider
pub struct AnthropicProvider {
    endpoint: String,
    model: String,
    api_key: String,
    max_tokens: u32,
    timeout: Duration,
    client: reqwest::blocking::Client,
}

/// Request body for the Messages API
#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    #[serde(skip_serializing_if = "str::is_empty")]
    system: &'a str,
    messages: Vec<Message<'a>>,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

impl AnthropicProvider {
    /// Create a new provider against the default endpoint
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::Authentication`] for an empty key and
    /// [`LlmError::Other`] if the HTTP client cannot be built.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Result<Self, LlmError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(LlmError::Authentication("API key is empty".to_string()));
        }

        let timeout = Duration::from_secs(DEFAULT_TIMEOUT_SECS);
        Ok(Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: model.into(),
            api_key,
            max_tokens: DEFAULT_MAX_TOKENS,
            timeout,
            client: build_client(timeout)?,
        })
    }

    /// Point the provider at a different endpoint (proxies, test servers)
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the response token limit
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Set the per-request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, LlmError> {
        self.timeout = timeout;
        self.client = build_client(timeout)?;
        Ok(self)
    }

    fn messages_url(&self) -> String {
        format!("{}/v1/messages", self.endpoint)
    }

    fn request_body<'a>(&'a self, prompt: &'a Prompt) -> MessagesRequest<'a> {
        MessagesRequest {
            model: &self.model,
            max_tokens: self.max_tokens,
            system: &prompt.system,
            messages: vec![Message {
                role: "user",
                content: &prompt.user,
            }],
        }
    }
}

impl LlmProvider for AnthropicProvider {
    type Error = LlmError;

    fn generate(&self, prompt: &Prompt) -> Result<String, Self::Error> {
        let url = self.messages_url();
        debug!("POST {} (model {}, prompt {} chars)", url, self.model, prompt.len());

        let response = self
            .client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&self.request_body(prompt))
            .send()
            .map_err(|e| LlmError::Communication(format!("Request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| LlmError::InvalidResponse(format!("Failed to read body: {}", e)))?;

        if status.is_success() {
            debug!("Response body {} chars", body.len());
            return Ok(body);
        }

        warn!("Anthropic API returned HTTP {}", status);
        Err(status_error(status, &self.model, body))
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

fn build_client(timeout: Duration) -> Result<reqwest::blocking::Client, LlmError> {
    reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| LlmError::Other(format!("Failed to build HTTP client: {}", e)))
}

fn status_error(status: StatusCode, model: &str, body: String) -> LlmError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => LlmError::Authentication(body),
        StatusCode::NOT_FOUND => LlmError::ModelNotAvailable(model.to_string()),
        StatusCode::TOO_MANY_REQUESTS => LlmError::RateLimitExceeded,
        _ => LlmError::Communication(format!("HTTP {}: {}", status, body)),
    }
}
