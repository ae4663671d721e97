//! Error types for OpenAI client.

use thiserror::Error;

/// Result type for OpenAI client operations.
pub type Result<T> = std::result::Result<T, OpenAIError>;

/// OpenAI client errors.
#[derive(Debug, Error)]
pub enum OpenAIError {
    /// Configuration error (missing API key, invalid settings)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network error (connection refused, DNS, TLS)
    #[error("Network error: {0}")]
    Network(String),

    /// Request exceeded the client timeout
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// API error (non-2xx response, rate limit, invalid request)
    #[error("API error: {0}")]
    Api(String),

    /// Parse error (invalid JSON, unexpected response format)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl OpenAIError {
    /// Whether the failure happened before the API produced an answer.
    pub fn is_transport(&self) -> bool {
        matches!(self, OpenAIError::Network(_) | OpenAIError::Timeout(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_errors() {
        assert!(OpenAIError::Network("refused".into()).is_transport());
        assert!(OpenAIError::Timeout("2s".into()).is_transport());
        assert!(!OpenAIError::Api("429".into()).is_transport());
        assert!(!OpenAIError::Parse("bad json".into()).is_transport());
    }
}
