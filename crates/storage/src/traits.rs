//! Storage backend trait for the game catalog.

use async_trait::async_trait;
use gamedex_core::{CatalogItem, GamePatch, NewGame};

use crate::error::StorageError;

/// Persistent catalog operations. Each call is a single-record,
/// all-or-nothing round-trip.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Every stored game, ordered by title ascending (case-insensitive).
    async fn fetch_all(&self) -> Result<Vec<CatalogItem>, StorageError>;

    /// Insert a game. The store assigns `id`, `created_at` and `updated_at`.
    async fn insert(&self, game: &NewGame) -> Result<CatalogItem, StorageError>;

    /// Apply a partial update and stamp `updated_at`.
    /// Returns `StorageError::NotFound` when `id` does not exist.
    async fn update(&self, id: &str, patch: &GamePatch) -> Result<CatalogItem, StorageError>;

    /// Delete a game. Returns `true` if a row was deleted.
    async fn delete(&self, id: &str) -> Result<bool, StorageError>;
}
