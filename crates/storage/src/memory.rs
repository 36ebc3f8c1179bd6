//! In-process catalog store with the same contract as the PostgreSQL one.

use async_trait::async_trait;
use chrono::Utc;
use gamedex_core::{CatalogItem, GamePatch, NewGame};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::error::StorageError;
use crate::traits::CatalogStore;

#[derive(Debug, Default)]
pub struct MemoryCatalogStore {
    games: Mutex<Vec<CatalogItem>>,
}

impl MemoryCatalogStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CatalogStore for MemoryCatalogStore {
    async fn fetch_all(&self) -> Result<Vec<CatalogItem>, StorageError> {
        let mut games = self.games.lock().await.clone();
        games.sort_by_cached_key(|g| g.title().to_lowercase());
        Ok(games)
    }

    async fn insert(&self, game: &NewGame) -> Result<CatalogItem, StorageError> {
        let now = Utc::now();
        let item = CatalogItem {
            id: Uuid::new_v4().to_string(),
            attributes: game.attributes().clone(),
            created_at: now,
            updated_at: now,
        };
        self.games.lock().await.push(item.clone());
        Ok(item)
    }

    async fn update(&self, id: &str, patch: &GamePatch) -> Result<CatalogItem, StorageError> {
        patch.validate().map_err(|e| StorageError::InvalidInput(e.to_string()))?;
        let mut games = self.games.lock().await;
        let Some(item) = games.iter_mut().find(|g| g.id == id) else {
            return Err(StorageError::NotFound { entity: "game", id: id.to_owned() });
        };
        patch.apply_to(&mut item.attributes);
        item.updated_at = Utc::now().max(item.created_at);
        Ok(item.clone())
    }

    async fn delete(&self, id: &str) -> Result<bool, StorageError> {
        let mut games = self.games.lock().await;
        let before = games.len();
        games.retain(|g| g.id != id);
        Ok(games.len() < before)
    }
}

#[cfg(test)]
#[path = "memory_tests.rs"]
mod tests;
