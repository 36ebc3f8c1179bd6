//! Typed error enum for the metadata lookup.

use thiserror::Error;

/// Errors from the games metadata API.
#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("RAWG API key not configured (set RAWG_API_KEY)")]
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
    #[error("client initialization failed: {0}")]
    ClientInit(String),
}
