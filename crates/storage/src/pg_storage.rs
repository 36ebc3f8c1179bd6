//! PostgreSQL catalog backend using sqlx.

use std::time::Duration;

use async_trait::async_trait;
use gamedex_core::{
    CatalogItem, GameAttributes, GamePatch, NewGame, PG_POOL_ACQUIRE_TIMEOUT_SECS,
    PG_POOL_MAX_CONNECTIONS, ValidationError,
};
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::error::StorageError;
use crate::pg_migrations::run_pg_migrations;
use crate::traits::CatalogStore;

const GAME_COLUMNS: &str =
    "id, title, description, category, genre, platform, year, image_url, created_at, updated_at";

#[derive(Clone, Debug)]
pub struct PgCatalogStore {
    pool: PgPool,
}

impl PgCatalogStore {
    /// Connects, runs migrations and returns a ready store.
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let pool = PgPoolOptions::new()
            .max_connections(PG_POOL_MAX_CONNECTIONS)
            .acquire_timeout(Duration::from_secs(PG_POOL_ACQUIRE_TIMEOUT_SECS))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;
        run_pg_migrations(&pool).await.map_err(|e| StorageError::Migration(e.to_string()))?;
        tracing::info!("PgCatalogStore initialized");
        Ok(Self { pool })
    }
}

fn row_to_item(row: &PgRow) -> Result<CatalogItem, StorageError> {
    let id: String = row.try_get("id")?;
    let title: String = row.try_get("title")?;
    if title.trim().is_empty() {
        return Err(StorageError::DataCorruption {
            context: format!("game {id} has an empty title"),
            source: Box::new(ValidationError::EmptyTitle),
        });
    }
    Ok(CatalogItem {
        id,
        attributes: GameAttributes {
            title,
            description: row.try_get("description")?,
            category: row.try_get("category")?,
            genre: row.try_get("genre")?,
            platform: row.try_get("platform")?,
            year: row.try_get("year")?,
            image_url: row.try_get("image_url")?,
        },
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

#[async_trait]
impl CatalogStore for PgCatalogStore {
    async fn fetch_all(&self) -> Result<Vec<CatalogItem>, StorageError> {
        let rows = sqlx::query(&format!(
            "SELECT {GAME_COLUMNS} FROM games ORDER BY LOWER(title) ASC, created_at ASC, id ASC"
        ))
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_item).collect()
    }

    async fn insert(&self, game: &NewGame) -> Result<CatalogItem, StorageError> {
        let attrs = game.attributes();
        let id = Uuid::new_v4().to_string();
        let row = sqlx::query(&format!(
            "INSERT INTO games (id, title, description, category, genre, platform, year, image_url)
             VALUES ($1,$2,$3,$4,$5,$6,$7,$8)
             RETURNING {GAME_COLUMNS}"
        ))
        .bind(&id)
        .bind(&attrs.title)
        .bind(&attrs.description)
        .bind(&attrs.category)
        .bind(&attrs.genre)
        .bind(&attrs.platform)
        .bind(attrs.year)
        .bind(&attrs.image_url)
        .fetch_one(&self.pool)
        .await?;
        tracing::debug!(id = %id, title = %attrs.title, "game inserted");
        row_to_item(&row)
    }

    async fn update(&self, id: &str, patch: &GamePatch) -> Result<CatalogItem, StorageError> {
        patch.validate().map_err(|e| StorageError::InvalidInput(e.to_string()))?;
        let row = sqlx::query(&format!(
            "UPDATE games SET
               title = COALESCE($2, title),
               description = COALESCE($3, description),
               category = COALESCE($4, category),
               genre = COALESCE($5, genre),
               platform = COALESCE($6, platform),
               year = COALESCE($7, year),
               image_url = COALESCE($8, image_url),
               updated_at = GREATEST(NOW(), created_at)
             WHERE id = $1
             RETURNING {GAME_COLUMNS}"
        ))
        .bind(id)
        .bind(patch.title.as_deref().map(str::trim))
        .bind(&patch.description)
        .bind(&patch.category)
        .bind(&patch.genre)
        .bind(&patch.platform)
        .bind(patch.year)
        .bind(&patch.image_url)
        .fetch_optional(&self.pool)
        .await?;
        match row {
            Some(row) => row_to_item(&row),
            None => Err(StorageError::NotFound { entity: "game", id: id.to_owned() }),
        }
    }

    async fn delete(&self, id: &str) -> Result<bool, StorageError> {
        let result = sqlx::query("DELETE FROM games WHERE id = $1").bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }
}
