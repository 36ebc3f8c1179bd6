//! Storage layer for the gamedex catalog
//!
//! One async trait, [`CatalogStore`], with a PostgreSQL backend for real use
//! and an in-memory backend for tests and offline runs.

mod error;
mod memory;
mod pg_migrations;
mod pg_storage;
mod traits;

pub use error::StorageError;
pub use memory::MemoryCatalogStore;
pub use pg_migrations::run_pg_migrations;
pub use pg_storage::PgCatalogStore;
pub use traits::CatalogStore;
