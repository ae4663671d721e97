//! Pure OpenAI REST API client
//!
//! A minimal client for the OpenAI chat completions API with no domain logic.
//! Supports plain chat completions and JSON-schema structured outputs.
//!
//! # Example
//!
//! ```rust,ignore
//! use openai_client::{OpenAIClient, ChatRequest, Message};
//!
//! let client = OpenAIClient::from_env()?;
//!
//! let response = client.chat_completion(
//!     ChatRequest::new("gpt-4o-mini").message(Message::user("Hello!")),
//! ).await?;
//! ```
//!
//! # Type-Safe Structured Output
//!
//! ```rust,ignore
//! #[derive(Deserialize, JsonSchema)]
//! struct Verdict {
//!     category: String,
//! }
//!
//! let verdict: Verdict = client
//!     .extract::<Verdict>("gpt-4o-mini", system_prompt, user_prompt)
//!     .await?;
//! ```

pub mod error;
pub mod schema;
pub mod types;

pub use error::{OpenAIError, Result};
pub use schema::{constrain_string_enum, StructuredOutput};
pub use types::*;

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, warn};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Pure OpenAI API client.
#[derive(Clone)]
pub struct OpenAIClient {
    http_client: Client,
    api_key: String,
    base_url: String,
}

impl OpenAIClient {
    /// Create a new OpenAI client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Create from environment variable `OPENAI_API_KEY`.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| OpenAIError::Config("OPENAI_API_KEY not set".into()))?;
        Ok(Self::new(api_key))
    }

    /// Set a custom base URL (for Azure, proxies, local mocks).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Bound every request made by this client.
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self> {
        self.http_client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| OpenAIError::Config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(self)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Type-safe structured output extraction.
    ///
    /// Generates a JSON schema from `T`, sends it as a strict `json_schema`
    /// response format, and deserializes the reply.
    pub async fn extract<T: StructuredOutput>(
        &self,
        model: &str,
        system_prompt: impl Into<String>,
        user_prompt: impl Into<String>,
    ) -> Result<T> {
        let request = StructuredRequest::new(model, system_prompt, user_prompt, T::openai_schema());
        let json_str = self.structured_output(request).await?;

        serde_json::from_str(strip_code_blocks(&json_str)).map_err(|e| {
            OpenAIError::Parse(format!("Failed to deserialize {}: {}", T::type_name(), e))
        })
    }

    /// Chat completion.
    pub async fn chat_completion(&self, request: ChatRequest) -> Result<ChatResponse> {
        let start = std::time::Instant::now();
        let raw = self.post_chat(&request).await?;
        let usage = raw.usage.clone();
        let content = first_choice(raw)?;

        debug!(
            model = %request.model,
            duration_ms = start.elapsed().as_millis(),
            "OpenAI chat completion"
        );

        Ok(ChatResponse { content, usage })
    }

    /// Structured output with JSON schema.
    ///
    /// Returns the raw JSON string produced by the model. Callers still have
    /// to validate it: strict mode constrains shape, not meaning.
    pub async fn structured_output(&self, request: StructuredRequest) -> Result<String> {
        let start = std::time::Instant::now();
        let raw = self.post_chat(&request).await?;
        let content = first_choice(raw)?;

        debug!(
            model = %request.model,
            duration_ms = start.elapsed().as_millis(),
            response_length = content.len(),
            "OpenAI structured output"
        );

        Ok(content)
    }

    async fn post_chat<B: serde::Serialize>(&self, body: &B) -> Result<ChatResponseRaw> {
        let response = self
            .http_client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "OpenAI request failed");
                if e.is_timeout() {
                    OpenAIError::Timeout(e.to_string())
                } else {
                    OpenAIError::Network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "OpenAI API error");
            return Err(OpenAIError::Api(format!(
                "OpenAI API error ({}): {}",
                status,
                truncate_to_char_boundary(&error_text, 500)
            )));
        }

        response
            .json::<ChatResponseRaw>()
            .await
            .map_err(|e| OpenAIError::Parse(e.to_string()))
    }
}

fn first_choice(raw: ChatResponseRaw) -> Result<String> {
    raw.choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .ok_or_else(|| OpenAIError::Api("No response from OpenAI".into()))
}
