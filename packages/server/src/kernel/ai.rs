// AI implementation using OpenAI
//
// This is the infrastructure implementation of BaseAI.
// Business logic (what to prompt for) lives in domain layers.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use openai_client::{ChatRequest, Message, OpenAIClient, OpenAIError, StructuredRequest};

use super::BaseAI;

/// Wrapper around OpenAIClient that implements BaseAI with a fixed model
#[derive(Clone)]
pub struct OpenAIAdapter {
    client: OpenAIClient,
    model: String,
}

impl OpenAIAdapter {
    pub fn new(client: OpenAIClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    /// Build a client whose HTTP requests are bounded by `request_timeout`.
    pub fn from_api_key(
        api_key: &str,
        model: impl Into<String>,
        request_timeout: Duration,
    ) -> Result<Self> {
        let client = OpenAIClient::new(api_key)
            .with_timeout(request_timeout)
            .context("Failed to build OpenAI client")?;
        Ok(Self::new(client, model))
    }
}

/// Transport failures (timeouts, unreachable API) are expected under load and
/// only warn; anything the API itself rejected is an error.
fn log_openai_failure(error: &OpenAIError, model: &str, message: &str) {
    if error.is_transport() {
        tracing::warn!(error = %error, model = %model, "{}", message);
    } else {
        tracing::error!(error = %error, model = %model, "{}", message);
    }
}

#[async_trait]
impl BaseAI for OpenAIAdapter {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let request = ChatRequest::new(&self.model).message(Message::user(prompt));

        let response = self.client.chat_completion(request).await.map_err(|e| {
            log_openai_failure(&e, &self.model, "OpenAI completion failed");
            e
        })?;

        Ok(response.content)
    }

    async fn generate_structured(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        schema: serde_json::Value,
    ) -> Result<String> {
        tracing::debug!(
            model = %self.model,
            prompt_length = user_prompt.len(),
            "Calling OpenAI structured output"
        );

        let request = StructuredRequest::new(&self.model, system_prompt, user_prompt, schema)
            .schema_name("discovery_category");

        let response = self.client.structured_output(request).await.map_err(|e| {
            log_openai_failure(&e, &self.model, "OpenAI structured output failed");
            e
        })?;

        tracing::debug!(
            model = %self.model,
            response_length = response.len(),
            "OpenAI structured output received"
        );

        Ok(response)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
