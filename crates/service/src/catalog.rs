//! In-memory catalog kept in step with persistent storage.

use std::collections::BTreeMap;
use std::sync::Arc;

use gamedex_core::{CatalogItem, GameAttributes, GamePatch, NewGame, StorageConfig};
use gamedex_storage::{CatalogStore, PgCatalogStore, StorageError};

use crate::error::ServiceError;

/// The consuming session's view of the catalog.
///
/// The collection changes only after the matching storage round-trip
/// succeeds. `loading` and `last_error` are status for observers, not a lock.
pub struct CatalogSession {
    store: Arc<dyn CatalogStore>,
    games: Vec<CatalogItem>,
    loading: bool,
    last_error: Option<String>,
}

impl CatalogSession {
    #[must_use]
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store, games: Vec::new(), loading: false, last_error: None }
    }

    /// Opens a session on the configured PostgreSQL catalog.
    pub async fn connect(config: &StorageConfig) -> Result<Self, ServiceError> {
        let Some(url) = config.database_url.as_deref() else {
            return Err(ServiceError::NotConfigured(
                "GAMEDEX_DATABASE_URL or DATABASE_URL environment variable must be set".to_owned(),
            ));
        };
        let store = PgCatalogStore::new(url).await?;
        Ok(Self::new(Arc::new(store)))
    }

    #[must_use]
    pub fn games(&self) -> &[CatalogItem] {
        &self.games
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Replaces the collection with the stored one.
    pub async fn fetch_games(&mut self) -> Result<(), ServiceError> {
        self.begin();
        let result = self.store.fetch_all().await.map_err(ServiceError::from);
        let result = self.finish(result)?;
        tracing::debug!(count = result.len(), "catalog loaded");
        self.games = result;
        Ok(())
    }

    /// Stores a new game and appends it to the collection.
    pub async fn add_game(&mut self, game: NewGame) -> Result<CatalogItem, ServiceError> {
        self.begin();
        let result = self.store.insert(&game).await.map_err(ServiceError::from);
        let item = self.finish(result)?;
        tracing::info!(id = %item.id, title = %item.title(), "game added");
        self.games.push(item.clone());
        Ok(item)
    }

    /// [`Self::add_game`] for unvalidated attributes; a blank title is
    /// rejected before storage is touched.
    pub async fn add_attributes(&mut self, attrs: GameAttributes) -> Result<CatalogItem, ServiceError> {
        match NewGame::try_from(attrs) {
            Ok(game) => self.add_game(game).await,
            Err(e) => {
                let err = ServiceError::from(e);
                self.last_error = Some(err.to_string());
                Err(err)
            },
        }
    }

    /// Applies `patch` to the stored game. The loaded copy is replaced when
    /// present; games the session never loaded stay out of the collection.
    pub async fn update_game(&mut self, id: &str, patch: GamePatch) -> Result<CatalogItem, ServiceError> {
        self.begin();
        let result = match patch.validate() {
            Ok(()) => self.store.update(id, &patch).await.map_err(ServiceError::from),
            Err(e) => Err(ServiceError::from(e)),
        };
        let item = self.finish(result)?;
        if let Some(existing) = self.games.iter_mut().find(|g| g.id == item.id) {
            *existing = item.clone();
        }
        tracing::info!(id = %item.id, "game updated");
        Ok(item)
    }

    /// Deletes the stored game, then drops it from the collection.
    /// A missing row is reported as not found.
    pub async fn delete_game(&mut self, id: &str) -> Result<(), ServiceError> {
        self.begin();
        let result = match self.store.delete(id).await {
            Ok(true) => Ok(()),
            Ok(false) => Err(ServiceError::from(StorageError::NotFound { entity: "game", id: id.to_owned() })),
            Err(e) => Err(ServiceError::from(e)),
        };
        self.finish(result)?;
        self.games.retain(|g| g.id != id);
        tracing::info!(id, "game deleted");
        Ok(())
    }

    /// Fuzzy search over the loaded collection, best match first.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<CatalogItem> {
        gamedex_search::search(&self.games, query)
    }

    #[must_use]
    pub fn sorted_games(&self) -> Vec<CatalogItem> {
        gamedex_search::sorted_by_title(&self.games)
    }

    #[must_use]
    pub fn games_by_category(&self) -> BTreeMap<String, Vec<CatalogItem>> {
        gamedex_search::group_by_category(&self.games)
    }

    fn begin(&mut self) {
        self.loading = true;
        self.last_error = None;
    }

    fn finish<T>(&mut self, result: Result<T, ServiceError>) -> Result<T, ServiceError> {
        self.loading = false;
        if let Err(e) = &result {
            tracing::error!(error = %e, transient = e.is_transient(), "catalog operation failed");
            self.last_error = Some(e.to_string());
        }
        result
    }
}

impl std::fmt::Debug for CatalogSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogSession")
            .field("games", &self.games.len())
            .field("loading", &self.loading)
            .field("last_error", &self.last_error)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
