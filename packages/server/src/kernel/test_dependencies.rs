// TestDependencies - mock implementations for testing
//
// Provides a scripted BaseAI that records every call, so tests can assert
// both on routing outcomes and on how many network calls were made.

use anyhow::Result;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::BaseAI;

// =============================================================================
// Mock AI
// =============================================================================

/// Arguments captured from a structured-output call
#[derive(Debug, Clone)]
pub struct StructuredCallArgs {
    pub system_prompt: String,
    pub user_prompt: String,
    pub schema: serde_json::Value,
}

#[derive(Debug, Clone)]
enum MockReply {
    Ok(String),
    Err(String),
}

#[derive(Clone, Default)]
pub struct MockAI {
    replies: Arc<Mutex<VecDeque<MockReply>>>,
    delay: Arc<Mutex<Option<Duration>>>,
    structured_calls: Arc<Mutex<Vec<StructuredCallArgs>>>,
    completion_calls: Arc<Mutex<Vec<String>>>,
}

impl MockAI {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a raw response body
    pub fn with_response(self, body: &str) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(MockReply::Ok(body.to_string()));
        self
    }

    /// Queue a `{"category": ...}` response
    pub fn with_category(self, category: &str) -> Self {
        let body = serde_json::json!({ "category": category }).to_string();
        self.with_response(&body)
    }

    /// Queue a failure
    pub fn with_error(self, message: &str) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(MockReply::Err(message.to_string()));
        self
    }

    /// Sleep before every reply (for timeout tests)
    pub fn with_delay(self, delay: Duration) -> Self {
        *self.delay.lock().unwrap() = Some(delay);
        self
    }

    /// All structured-output calls made so far
    pub fn structured_calls(&self) -> Vec<StructuredCallArgs> {
        self.structured_calls.lock().unwrap().clone()
    }

    /// Total calls of any kind
    pub fn call_count(&self) -> usize {
        self.structured_calls.lock().unwrap().len() + self.completion_calls.lock().unwrap().len()
    }

    async fn next_reply(&self) -> Result<String> {
        let delay = *self.delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let reply = self.replies.lock().unwrap().pop_front();
        match reply {
            Some(MockReply::Ok(body)) => Ok(body),
            Some(MockReply::Err(message)) => Err(anyhow::anyhow!(message)),
            None => Err(anyhow::anyhow!("MockAI: no response queued")),
        }
    }
}

#[async_trait]
impl BaseAI for MockAI {
    async fn complete(&self, prompt: &str) -> Result<String> {
        self.completion_calls
            .lock()
            .unwrap()
            .push(prompt.to_string());
        self.next_reply().await
    }

    async fn generate_structured(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        schema: serde_json::Value,
    ) -> Result<String> {
        self.structured_calls
            .lock()
            .unwrap()
            .push(StructuredCallArgs {
                system_prompt: system_prompt.to_string(),
                user_prompt: user_prompt.to_string(),
                schema,
            });
        self.next_reply().await
    }

    fn model_name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn replies_are_served_in_order_and_recorded() {
        let ai = MockAI::new().with_category("books").with_error("boom");

        let first = ai
            .generate_structured("sys", "one", serde_json::json!({}))
            .await
            .unwrap();
        assert_eq!(first, r#"{"category":"books"}"#);

        let second = ai.generate_structured("sys", "two", serde_json::json!({})).await;
        assert!(second.is_err());

        let third = ai.complete("three").await;
        assert!(third.is_err());

        assert_eq!(ai.call_count(), 3);
        assert_eq!(ai.structured_calls()[1].user_prompt, "two");
    }
}
