//! Integration tests for PgCatalogStore.
//! Run with: DATABASE_URL=... cargo test -p gamedex-storage -- --ignored pg_

#![allow(clippy::unwrap_used, reason = "integration test code")]

use gamedex_core::{GameAttributes, GamePatch, NewGame};
use gamedex_storage::{CatalogStore, PgCatalogStore, StorageError};
use uuid::Uuid;

async fn create_pg_store() -> PgCatalogStore {
    let url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must be set for PgCatalogStore integration tests");
    PgCatalogStore::new(&url).await.expect("Failed to connect to PostgreSQL")
}

fn unique_title(prefix: &str) -> String {
    format!("{prefix} {}", Uuid::new_v4())
}

fn make_game(title: &str) -> NewGame {
    NewGame::try_from(GameAttributes {
        title: title.to_owned(),
        category: Some("Video Game".to_owned()),
        platform: Some("Xbox".to_owned()),
        year: Some(2001),
        ..GameAttributes::default()
    })
    .unwrap()
}

#[tokio::test]
#[ignore]
async fn pg_insert_and_fetch() {
    let store = create_pg_store().await;
    let title = unique_title("Halo");
    let created = store.insert(&make_game(&title)).await.unwrap();

    assert!(Uuid::parse_str(&created.id).is_ok());
    assert!(created.updated_at >= created.created_at);

    let all = store.fetch_all().await.unwrap();
    let found = all.iter().find(|g| g.id == created.id).unwrap();
    assert_eq!(found.attributes, created.attributes);

    store.delete(&created.id).await.unwrap();
}

#[tokio::test]
#[ignore]
async fn pg_update_is_partial() {
    let store = create_pg_store().await;
    let created = store.insert(&make_game(&unique_title("Catan"))).await.unwrap();

    let patch = GamePatch { genre: Some("Strategy".to_owned()), ..GamePatch::default() };
    let updated = store.update(&created.id, &patch).await.unwrap();

    assert_eq!(updated.attributes.genre.as_deref(), Some("Strategy"));
    assert_eq!(updated.attributes.platform.as_deref(), Some("Xbox"));
    assert_eq!(updated.attributes.year, Some(2001));
    assert!(updated.updated_at >= updated.created_at);

    store.delete(&created.id).await.unwrap();
}

#[tokio::test]
#[ignore]
async fn pg_update_missing_is_not_found() {
    let store = create_pg_store().await;
    let err = store.update(&Uuid::new_v4().to_string(), &GamePatch::default()).await.unwrap_err();
    assert!(matches!(err, StorageError::NotFound { entity: "game", .. }));
}

#[tokio::test]
#[ignore]
async fn pg_delete_reports_removal() {
    let store = create_pg_store().await;
    let created = store.insert(&make_game(&unique_title("Azul"))).await.unwrap();

    assert!(store.delete(&created.id).await.unwrap());
    assert!(!store.delete(&created.id).await.unwrap());
}
