//! Typed error enum for the LLM crate.

use thiserror::Error;

/// Errors from LLM API operations.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("OpenAI API key not configured (set OPENAI_API_KEY)")]
    MissingApiKey,
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),
    #[error("HTTP status {code}: {body}")]
    HttpStatus { code: u16, body: String },
    #[error("JSON parse error in {context}: {source}")]
    JsonParse {
        context: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("empty response: the model returned no content")]
    EmptyResponse,
    #[error("client initialization failed: {0}")]
    ClientInit(String),
}

impl LlmError {
    /// Whether the failure is a missing or rejected credential.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        match self {
            Self::MissingApiKey => true,
            Self::HttpStatus { code, .. } => matches!(code, 401 | 403),
            _ => false,
        }
    }
}
