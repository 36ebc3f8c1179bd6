use thiserror::Error;

/// No parsing strategy produced a JSON object from a model response.
///
/// Carries the leading characters of the raw response so the failure can be
/// diagnosed without logging the whole (possibly large) body.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("could not parse model response as a JSON object. Raw response: {raw_prefix}...")]
pub struct ExtractionFailure {
    pub raw_prefix: String,
}

impl ExtractionFailure {
    /// Builds a failure from the full raw response, keeping at most
    /// [`crate::DIAGNOSTIC_PREFIX_CHARS`] characters.
    #[must_use]
    pub fn from_raw(raw: &str) -> Self {
        let raw_prefix = raw.chars().take(crate::DIAGNOSTIC_PREFIX_CHARS).collect();
        Self { raw_prefix }
    }
}

/// Domain validation failures for catalog records.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("title must not be empty")]
    EmptyTitle,
}
