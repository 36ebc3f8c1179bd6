//! Explicit configuration values for the collaborator clients.
//!
//! Credentials are passed into clients at construction; nothing here is
//! global or mutable.

use std::fmt;
use std::time::Duration;

use crate::{
    DEFAULT_HTTP_TIMEOUT_SECS, DEFAULT_LLM_BASE_URL, DEFAULT_LLM_MODEL,
    DEFAULT_METADATA_BASE_URL, DEFAULT_METADATA_PAGE_SIZE, env_non_empty, env_parse_with_default,
};

/// Language-model endpoint settings.
#[derive(Clone)]
pub struct LlmConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
}

impl LlmConfig {
    /// Reads `OPENAI_API_KEY`, `GAMEDEX_LLM_BASE_URL`, `GAMEDEX_LLM_MODEL` and
    /// `GAMEDEX_HTTP_TIMEOUT_SECS`.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            api_key: env_non_empty("OPENAI_API_KEY"),
            base_url: env_non_empty("GAMEDEX_LLM_BASE_URL")
                .unwrap_or_else(|| DEFAULT_LLM_BASE_URL.to_owned()),
            model: env_non_empty("GAMEDEX_LLM_MODEL").unwrap_or_else(|| DEFAULT_LLM_MODEL.to_owned()),
            timeout: http_timeout_from_env(),
        }
    }

    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.trim().is_empty())
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_LLM_BASE_URL.to_owned(),
            model: DEFAULT_LLM_MODEL.to_owned(),
            timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        }
    }
}

impl fmt::Debug for LlmConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LlmConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Games metadata API settings.
#[derive(Clone)]
pub struct MetadataConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub page_size: u32,
    pub timeout: Duration,
}

impl MetadataConfig {
    /// Reads `RAWG_API_KEY`, `GAMEDEX_RAWG_BASE_URL`, `GAMEDEX_RAWG_PAGE_SIZE`
    /// and `GAMEDEX_HTTP_TIMEOUT_SECS`.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            api_key: env_non_empty("RAWG_API_KEY"),
            base_url: env_non_empty("GAMEDEX_RAWG_BASE_URL")
                .unwrap_or_else(|| DEFAULT_METADATA_BASE_URL.to_owned()),
            page_size: env_parse_with_default("GAMEDEX_RAWG_PAGE_SIZE", DEFAULT_METADATA_PAGE_SIZE),
            timeout: http_timeout_from_env(),
        }
    }

    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.trim().is_empty())
    }
}

impl Default for MetadataConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_METADATA_BASE_URL.to_owned(),
            page_size: DEFAULT_METADATA_PAGE_SIZE,
            timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        }
    }
}

impl fmt::Debug for MetadataConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MetadataConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("base_url", &self.base_url)
            .field("page_size", &self.page_size)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Catalog database settings.
#[derive(Clone, Default)]
pub struct StorageConfig {
    pub database_url: Option<String>,
}

impl StorageConfig {
    /// Reads `GAMEDEX_DATABASE_URL`, falling back to `DATABASE_URL`.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            database_url: env_non_empty("GAMEDEX_DATABASE_URL")
                .or_else(|| env_non_empty("DATABASE_URL")),
        }
    }
}

impl fmt::Debug for StorageConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StorageConfig")
            .field("database_url", &self.database_url.as_ref().map(|_| "***"))
            .finish()
    }
}

fn http_timeout_from_env() -> Duration {
    Duration::from_secs(env_parse_with_default("GAMEDEX_HTTP_TIMEOUT_SECS", DEFAULT_HTTP_TIMEOUT_SECS))
}
