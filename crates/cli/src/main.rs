use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use gamedex_core::{GameAttributes, GamePatch, StorageConfig};
use gamedex_service::CatalogSession;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "gamedex")]
#[command(about = "Recognize games from photos and keep a searchable catalog", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Identify the game in a photo
    Recognize {
        image: PathBuf,
        /// Store the recognized game in the catalog
        #[arg(long)]
        save: bool,
    },
    /// List the catalog alphabetically
    List {
        #[arg(long)]
        by_category: bool,
    },
    /// Fuzzy search over the catalog
    Search { query: String },
    /// Add a game
    Add {
        #[arg(long)]
        title: String,
        #[command(flatten)]
        fields: GameFields,
    },
    /// Update fields of a stored game
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[command(flatten)]
        fields: GameFields,
    },
    /// Delete a stored game
    Delete { id: String },
    /// Best metadata match for a title
    Lookup { title: String },
    /// Known platform values
    Platforms,
}

#[derive(Args)]
struct GameFields {
    #[arg(long)]
    description: Option<String>,
    #[arg(long)]
    category: Option<String>,
    #[arg(long)]
    genre: Option<String>,
    #[arg(long)]
    platform: Option<String>,
    #[arg(long)]
    year: Option<i32>,
    #[arg(long)]
    image_url: Option<String>,
}

impl GameFields {
    fn into_attributes(self, title: String) -> GameAttributes {
        GameAttributes {
            title,
            description: self.description,
            category: self.category,
            genre: self.genre,
            platform: self.platform,
            year: self.year,
            image_url: self.image_url,
        }
    }

    fn into_patch(self, title: Option<String>) -> GamePatch {
        GamePatch {
            title,
            description: self.description,
            category: self.category,
            genre: self.genre,
            platform: self.platform,
            year: self.year,
            image_url: self.image_url,
        }
    }
}

pub(crate) async fn open_session() -> Result<CatalogSession> {
    Ok(CatalogSession::connect(&StorageConfig::from_env()).await?)
}

pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Recognize { image, save } => commands::recognize::run(&image, save).await?,
        Commands::List { by_category } => commands::catalog::run_list(by_category).await?,
        Commands::Search { query } => commands::catalog::run_search(&query).await?,
        Commands::Add { title, fields } => {
            commands::catalog::run_add(fields.into_attributes(title)).await?;
        },
        Commands::Update { id, title, fields } => {
            commands::catalog::run_update(&id, fields.into_patch(title)).await?;
        },
        Commands::Delete { id } => commands::catalog::run_delete(&id).await?,
        Commands::Lookup { title } => commands::recognize::run_lookup(&title).await?,
        Commands::Platforms => commands::recognize::run_platforms()?,
    }

    Ok(())
}
