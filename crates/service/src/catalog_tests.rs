#![allow(clippy::unwrap_used, reason = "test code")]

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use gamedex_storage::MemoryCatalogStore;

use super::*;

/// Fails every call and counts how often it was reached.
#[derive(Default)]
struct FailingStore {
    calls: AtomicUsize,
}

impl FailingStore {
    fn fail(&self) -> StorageError {
        self.calls.fetch_add(1, Ordering::SeqCst);
        StorageError::Migration("database unavailable".to_owned())
    }
}

#[async_trait]
impl CatalogStore for FailingStore {
    async fn fetch_all(&self) -> Result<Vec<CatalogItem>, StorageError> {
        Err(self.fail())
    }

    async fn insert(&self, _game: &NewGame) -> Result<CatalogItem, StorageError> {
        Err(self.fail())
    }

    async fn update(&self, _id: &str, _patch: &GamePatch) -> Result<CatalogItem, StorageError> {
        Err(self.fail())
    }

    async fn delete(&self, _id: &str) -> Result<bool, StorageError> {
        Err(self.fail())
    }
}

fn attrs(title: &str, category: Option<&str>) -> GameAttributes {
    GameAttributes {
        title: title.to_owned(),
        category: category.map(str::to_owned),
        ..GameAttributes::default()
    }
}

fn new_game(title: &str, category: Option<&str>) -> NewGame {
    NewGame::try_from(attrs(title, category)).unwrap()
}

async fn seeded_session() -> CatalogSession {
    let store = Arc::new(MemoryCatalogStore::new());
    for (title, category) in [
        ("Zelda", Some("Video Game")),
        ("Catan", Some("Board Game")),
        ("Azul", Some("Board Game")),
        ("Mystery Box", None),
    ] {
        store.insert(&new_game(title, category)).await.unwrap();
    }
    let mut session = CatalogSession::new(store);
    session.fetch_games().await.unwrap();
    session
}

fn titles(items: &[CatalogItem]) -> Vec<&str> {
    items.iter().map(CatalogItem::title).collect()
}

#[tokio::test]
async fn test_fetch_games_loads_collection() {
    let session = seeded_session().await;
    assert_eq!(titles(session.games()), vec!["Azul", "Catan", "Mystery Box", "Zelda"]);
    assert!(!session.is_loading());
    assert!(session.last_error().is_none());
}

#[tokio::test]
async fn test_add_game_appends_stored_item() {
    let mut session = CatalogSession::new(Arc::new(MemoryCatalogStore::new()));
    let item = session.add_game(new_game("Halo", Some("Video Game"))).await.unwrap();

    assert_eq!(session.games(), std::slice::from_ref(&item));
    assert!(!item.id.is_empty());
}

#[tokio::test]
async fn test_add_attributes_rejects_blank_title_before_storage() {
    let store = Arc::new(FailingStore::default());
    let mut session = CatalogSession::new(store.clone());

    let err = session.add_attributes(attrs("   ", Some("Board Game"))).await.unwrap_err();

    assert!(matches!(err, ServiceError::InvalidInput(_)));
    assert_eq!(store.calls.load(Ordering::SeqCst), 0);
    assert!(session.last_error().is_some());
    assert!(session.games().is_empty());
}

#[tokio::test]
async fn test_update_game_replaces_item() {
    let mut session = seeded_session().await;
    let id = session.games()[1].id.clone();

    let patch = GamePatch { genre: Some("Strategy".to_owned()), ..GamePatch::default() };
    let updated = session.update_game(&id, patch).await.unwrap();

    assert_eq!(updated.attributes.genre.as_deref(), Some("Strategy"));
    assert_eq!(session.games()[1], updated);
    assert_eq!(session.games().len(), 4);
}

#[tokio::test]
async fn test_update_blank_title_is_invalid() {
    let mut session = seeded_session().await;
    let id = session.games()[0].id.clone();
    let before = session.games().to_vec();

    let patch = GamePatch { title: Some(String::new()), ..GamePatch::default() };
    let err = session.update_game(&id, patch).await.unwrap_err();

    assert!(matches!(err, ServiceError::InvalidInput(_)));
    assert_eq!(session.games(), before.as_slice());
}

#[tokio::test]
async fn test_delete_game_removes_item() {
    let mut session = seeded_session().await;
    let id = session.games()[0].id.clone();

    session.delete_game(&id).await.unwrap();

    assert_eq!(titles(session.games()), vec!["Catan", "Mystery Box", "Zelda"]);
}

#[tokio::test]
async fn test_delete_missing_is_not_found() {
    let mut session = seeded_session().await;
    let err = session.delete_game("missing").await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(session.games().len(), 4);
    assert!(session.last_error().is_some_and(|e| e.contains("missing")));
}

#[tokio::test]
async fn test_storage_failure_leaves_collection_unchanged() {
    let store = Arc::new(FailingStore::default());
    let mut session = CatalogSession::new(store.clone());

    assert!(session.fetch_games().await.is_err());
    assert!(session.add_game(new_game("Halo", None)).await.is_err());
    assert!(session.update_game("x", GamePatch::default()).await.is_err());
    assert!(session.delete_game("x").await.is_err());

    assert!(session.games().is_empty());
    assert!(!session.is_loading());
    assert_eq!(store.calls.load(Ordering::SeqCst), 4);
    assert!(session.last_error().is_some_and(|e| e.contains("database unavailable")));
}

#[tokio::test]
async fn test_success_clears_last_error() {
    let mut session = seeded_session().await;
    assert!(session.delete_game("missing").await.is_err());
    session.fetch_games().await.unwrap();
    assert!(session.last_error().is_none());
}

#[tokio::test]
async fn test_views_delegate_to_search() {
    let session = seeded_session().await;

    assert_eq!(titles(&session.search("catn")), vec!["Catan"]);
    assert_eq!(session.search("").len(), 4);
    assert_eq!(titles(&session.sorted_games()), vec!["Azul", "Catan", "Mystery Box", "Zelda"]);

    let groups = session.games_by_category();
    assert_eq!(titles(&groups["Board Game"]), vec!["Azul", "Catan"]);
    assert_eq!(titles(&groups["Uncategorized"]), vec!["Mystery Box"]);
}

#[tokio::test]
async fn test_update_of_unloaded_game_keeps_collection() {
    let store = Arc::new(MemoryCatalogStore::new());
    let hidden = store.insert(&new_game("Hidden", None)).await.unwrap();
    let mut session = CatalogSession::new(store.clone());

    let patch = GamePatch { genre: Some("Puzzle".to_owned()), ..GamePatch::default() };
    let updated = session.update_game(&hidden.id, patch).await.unwrap();

    assert_eq!(updated.attributes.genre.as_deref(), Some("Puzzle"));
    assert!(session.games().is_empty());
    assert_eq!(store.fetch_all().await.unwrap()[0].attributes.genre.as_deref(), Some("Puzzle"));
}

#[tokio::test]
async fn test_connect_without_database_url() {
    let err = CatalogSession::connect(&StorageConfig::default()).await.unwrap_err();
    assert!(matches!(err, ServiceError::NotConfigured(_)));
    assert!(err.to_string().contains("DATABASE_URL"));
}
