//! LLM tier: remote classification constrained to the fixed category set.
//!
//! The model is untrusted. Whatever comes back is parsed and checked against
//! `Category` before it can leave this module.

use std::time::Duration;

use openai_client::{constrain_string_enum, strip_code_blocks, truncate_to_char_boundary, StructuredOutput};
use schemars::JsonSchema;
use serde::Deserialize;
use thiserror::Error;

use crate::domains::discovery::models::Category;
use crate::kernel::BaseAI;

/// Label the model uses to say "not a discovery request".
pub const NONE_LABEL: &str = "none";

const MAX_UTTERANCE_BYTES: usize = 1_000;

#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("classifier timed out after {0:?}")]
    Timeout(Duration),

    #[error("classifier call failed: {0}")]
    Upstream(#[source] anyhow::Error),

    #[error("classifier returned a malformed response: {0}")]
    Malformed(String),

    #[error("classifier returned a category outside the fixed set: {0}")]
    UnknownCategory(String),
}

#[derive(Debug, Deserialize, JsonSchema)]
struct CategoryVerdict {
    /// One discovery category, or "none"
    category: String,
}

/// Strict response schema: `{"category": <one of the categories or "none">}`.
pub fn category_schema() -> serde_json::Value {
    let mut schema = CategoryVerdict::openai_schema();
    constrain_string_enum(
        &mut schema,
        "category",
        Category::ALL
            .iter()
            .map(|c| c.as_str())
            .chain(std::iter::once(NONE_LABEL)),
    );
    schema
}

pub fn build_system_prompt() -> String {
    let mut prompt = String::from(
        "You route messages sent to a recommendation assistant.\n\
         Decide whether the user is asking for a recommendation, and if so in which category.\n\n\
         ## Categories\n\n",
    );

    for category in Category::ALL {
        prompt.push_str(&format!("- {}: {}\n", category.as_str(), category.description()));
    }

    prompt.push_str(&format!(
        "\n## Rules\n\n\
         - Answer with exactly one category from the list, or \"{none}\".\n\
         - Use \"{none}\" when the user is not asking for suggestions, or when no category fits.\n\
         - Never invent a category that is not in the list.\n",
        none = NONE_LABEL
    ));

    prompt
}

/// Parse and validate a classifier response.
///
/// Accepts the schema'd JSON object, tolerating code fences, and falls back
/// to a bare label for providers that ignore the response format. Returns
/// `Ok(None)` when the model answered "none".
pub fn parse_verdict(body: &str) -> Result<Option<Category>, ClassifierError> {
    let cleaned = strip_code_blocks(body);

    let label = match serde_json::from_str::<CategoryVerdict>(cleaned) {
        Ok(verdict) => verdict.category,
        Err(e) => {
            let bare = cleaned.trim_matches(|c: char| c == '"' || c.is_whitespace());
            if bare.is_empty() || bare.contains(char::is_whitespace) || bare.starts_with('{') {
                return Err(ClassifierError::Malformed(format!(
                    "{} (body: {:?})",
                    e,
                    truncate_to_char_boundary(cleaned, 200)
                )));
            }
            bare.to_string()
        }
    };

    if label.trim().eq_ignore_ascii_case(NONE_LABEL) {
        return Ok(None);
    }

    label
        .parse::<Category>()
        .map(Some)
        .map_err(|_| ClassifierError::UnknownCategory(label))
}

/// Ask the remote classifier for a category, bounded by `timeout`.
///
/// Makes exactly one attempt. Dropping the returned future abandons the
/// in-flight call.
pub async fn classify_with_llm(
    ai: &dyn BaseAI,
    utterance: &str,
    timeout: Duration,
) -> Result<Option<Category>, ClassifierError> {
    let user_prompt = truncate_to_char_boundary(utterance.trim(), MAX_UTTERANCE_BYTES);
    let system_prompt = build_system_prompt();
    let call = ai.generate_structured(&system_prompt, user_prompt, category_schema());

    let body = tokio::time::timeout(timeout, call)
        .await
        .map_err(|_| ClassifierError::Timeout(timeout))?
        .map_err(ClassifierError::Upstream)?;

    parse_verdict(&body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::MockAI;

    #[test]
    fn schema_enumerates_every_category_plus_none() {
        let schema = category_schema();
        let values = schema["properties"]["category"]["enum"].as_array().unwrap();

        assert_eq!(values.len(), Category::ALL.len() + 1);
        assert!(values.contains(&serde_json::json!("movies")));
        assert!(values.contains(&serde_json::json!("none")));
        assert_eq!(schema["additionalProperties"], false);
    }

    #[test]
    fn prompt_lists_every_category() {
        let prompt = build_system_prompt();
        for category in Category::ALL {
            assert!(prompt.contains(&format!("- {}:", category.as_str())));
        }
    }

    #[test]
    fn parse_accepts_json_fenced_json_and_bare_labels() {
        assert_eq!(parse_verdict(r#"{"category":"movies"}"#).unwrap(), Some(Category::Movies));
        assert_eq!(
            parse_verdict("```json\n{\"category\": \"Books\"}\n```").unwrap(),
            Some(Category::Books)
        );
        assert_eq!(parse_verdict("\"music\"").unwrap(), Some(Category::Music));
        assert_eq!(parse_verdict(r#"{"category":"none"}"#).unwrap(), None);
        assert_eq!(parse_verdict("NONE").unwrap(), None);
    }

    #[test]
    fn parse_rejects_values_outside_the_set() {
        assert!(matches!(
            parse_verdict(r#"{"category":"sports"}"#),
            Err(ClassifierError::UnknownCategory(label)) if label == "sports"
        ));
        assert!(matches!(
            parse_verdict("sports"),
            Err(ClassifierError::UnknownCategory(_))
        ));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!(parse_verdict(""), Err(ClassifierError::Malformed(_))));
        assert!(matches!(
            parse_verdict("I think it's movies"),
            Err(ClassifierError::Malformed(_))
        ));
        assert!(matches!(
            parse_verdict(r#"{"label":"movies"}"#),
            Err(ClassifierError::Malformed(_))
        ));
    }

    #[tokio::test]
    async fn classify_sends_utterance_and_schema() {
        let ai = MockAI::new().with_category("tv");

        let result = classify_with_llm(&ai, "  what should I binge next  ", Duration::from_secs(1))
            .await
            .unwrap();

        assert_eq!(result, Some(Category::Tv));
        let calls = ai.structured_calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].user_prompt, "what should I binge next");
        assert_eq!(calls[0].schema, category_schema());
    }

    #[tokio::test]
    async fn classify_times_out() {
        let ai = MockAI::new()
            .with_category("movies")
            .with_delay(Duration::from_millis(200));

        let result = classify_with_llm(&ai, "what should I watch", Duration::from_millis(20)).await;

        assert!(matches!(result, Err(ClassifierError::Timeout(_))));
    }

    #[tokio::test]
    async fn classify_surfaces_upstream_errors() {
        let ai = MockAI::new().with_error("connection reset");

        let result = classify_with_llm(&ai, "what should I watch", Duration::from_secs(1)).await;

        assert!(matches!(result, Err(ClassifierError::Upstream(_))));
    }
}
