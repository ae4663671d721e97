// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Business logic (like "classify a discovery query") lives in domain activities
// that take these traits.
//
// Naming convention: Base* for trait names (e.g., BaseAI)

use anyhow::Result;
use async_trait::async_trait;

// =============================================================================
// AI Trait (Infrastructure - Generic LLM capabilities)
// =============================================================================

#[async_trait]
pub trait BaseAI: Send + Sync {
    /// Complete a prompt with an LLM (returns raw text response)
    async fn complete(&self, prompt: &str) -> Result<String>;

    /// Generate structured output with a JSON schema
    /// Returns JSON string that should conform to the schema; callers validate it
    async fn generate_structured(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        schema: serde_json::Value,
    ) -> Result<String> {
        // Default implementation ignores schema and just prompts for JSON
        let combined = format!(
            "{}\n\nRespond with valid JSON matching this schema:\n{}\n\n{}",
            system_prompt, schema, user_prompt
        );
        self.complete(&combined).await
    }

    /// Provider/model label for logs
    fn model_name(&self) -> &str {
        "unknown"
    }
}
