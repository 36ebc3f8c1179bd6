//! Typed error enums for the service layer.

use gamedex_core::{ExtractionFailure, ValidationError};
use gamedex_llm::LlmError;
use gamedex_storage::StorageError;
use thiserror::Error;

/// Why a photo could not be turned into game attributes.
#[derive(Debug, Error)]
pub enum RecognitionError {
    /// A required credential is missing or was rejected.
    #[error("not configured: {0}")]
    NotConfigured(String),

    /// The model call failed; the user can fix configuration or retry.
    #[error("recognition request failed, check configuration or retry: {0}")]
    Transport(#[source] LlmError),

    #[error(transparent)]
    Extraction(#[from] ExtractionFailure),

    /// The model answered with an object that carries no attribute.
    #[error("no game could be recognized in the image")]
    Unrecognized,

    #[error("could not read image {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<LlmError> for RecognitionError {
    fn from(err: LlmError) -> Self {
        if err.is_configuration() {
            Self::NotConfigured(err.to_string())
        } else {
            Self::Transport(err)
        }
    }
}

/// Catalog operation failures.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// Caller provided invalid input (blank title).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Required backend (database) is not configured.
    #[error("not configured: {0}")]
    NotConfigured(String),
}

impl ServiceError {
    /// Whether this error is likely transient (worth retrying).
    #[must_use]
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Storage(e) if e.is_transient())
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Storage(StorageError::NotFound { .. }))
    }
}

impl From<ValidationError> for ServiceError {
    fn from(err: ValidationError) -> Self {
        Self::InvalidInput(err.to_string())
    }
}
