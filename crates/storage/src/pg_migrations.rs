//! PostgreSQL schema migrations for the game catalog.

use sqlx::PgPool;

/// Run all PostgreSQL migrations. Every statement is idempotent.
pub async fn run_pg_migrations(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS games (
            id TEXT PRIMARY KEY,
            title TEXT NOT NULL CHECK (LENGTH(TRIM(title)) > 0),
            description TEXT,
            category TEXT,
            genre TEXT,
            platform TEXT,
            year INTEGER,
            image_url TEXT,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_games_title ON games (LOWER(title))")
        .execute(pool)
        .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_games_category ON games (category)")
        .execute(pool)
        .await?;

    tracing::debug!("PostgreSQL catalog migrations applied");
    Ok(())
}
