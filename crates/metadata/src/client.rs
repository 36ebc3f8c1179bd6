use async_trait::async_trait;
use gamedex_core::{MetadataCandidate, MetadataConfig};

use crate::error::MetadataError;
use crate::rawg_types::{RawgGame, SearchResponse};

/// A games metadata source queried by free-text title.
#[async_trait]
pub trait MetadataLookup: Send + Sync {
    /// Returns candidates in the source's relevance order.
    async fn search_games(&self, query: &str) -> Result<Vec<MetadataCandidate>, MetadataError>;
}

/// Client for the RAWG games database API.
pub struct RawgClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    page_size: u32,
}

impl std::fmt::Debug for RawgClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RawgClient")
            .field("api_key", &"***")
            .field("base_url", &self.base_url)
            .field("page_size", &self.page_size)
            .finish_non_exhaustive()
    }
}

impl RawgClient {
    /// Creates a client from explicit configuration.
    ///
    /// # Errors
    /// Returns [`MetadataError::MissingApiKey`] when no key is configured, or
    /// [`MetadataError::ClientInit`] if the HTTP client cannot be built.
    pub fn new(config: &MetadataConfig) -> Result<Self, MetadataError> {
        let api_key = config
            .api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .ok_or(MetadataError::MissingApiKey)?;
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| MetadataError::ClientInit(e.to_string()))?;
        Ok(Self {
            client,
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
            page_size: config.page_size,
        })
    }

    /// Fetches a single game by its RAWG id.
    ///
    /// Failures are logged and reported as `None`.
    pub async fn lookup_by_id(&self, id: u64) -> Option<MetadataCandidate> {
        match self.fetch_by_id(id).await {
            Ok(candidate) => Some(candidate),
            Err(e) => {
                tracing::warn!(id, error = %e, "metadata lookup by id failed");
                None
            },
        }
    }

    async fn fetch_by_id(&self, id: u64) -> Result<MetadataCandidate, MetadataError> {
        let body = self
            .get(&format!("{}/games/{id}", self.base_url), &[("key", self.api_key.as_str())])
            .await?;
        let game: RawgGame = serde_json::from_str(&body)
            .map_err(|e| MetadataError::JsonParse { context: format!("game {id}"), source: e })?;
        Ok(game.into())
    }

    async fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<String, MetadataError> {
        let response = self.client.get(url).query(query).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body =
                response.text().await.unwrap_or_else(|_| "Could not read error body".to_owned());
            return Err(MetadataError::HttpStatus { code: status.as_u16(), body });
        }
        Ok(response.text().await?)
    }
}

#[async_trait]
impl MetadataLookup for RawgClient {
    async fn search_games(&self, query: &str) -> Result<Vec<MetadataCandidate>, MetadataError> {
        let page_size = self.page_size.to_string();
        let body = self
            .get(
                &format!("{}/games", self.base_url),
                &[("search", query), ("key", self.api_key.as_str()), ("page_size", page_size.as_str())],
            )
            .await?;
        let response: SearchResponse = serde_json::from_str(&body).map_err(|e| {
            MetadataError::JsonParse { context: "games search response".to_owned(), source: e }
        })?;
        let candidates: Vec<MetadataCandidate> =
            response.results.unwrap_or_default().into_iter().map(Into::into).collect();
        tracing::debug!(query, count = candidates.len(), "metadata search completed");
        Ok(candidates)
    }
}
