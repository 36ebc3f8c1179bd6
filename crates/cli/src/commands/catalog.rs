use anyhow::{Result, bail};
use gamedex_core::{GameAttributes, GamePatch};
use serde_json::json;

use crate::{open_session, print_json};

pub(crate) async fn run_list(by_category: bool) -> Result<()> {
    let mut session = open_session().await?;
    session.fetch_games().await?;
    if by_category {
        print_json(&session.games_by_category())
    } else {
        print_json(&session.sorted_games())
    }
}

pub(crate) async fn run_search(query: &str) -> Result<()> {
    let mut session = open_session().await?;
    session.fetch_games().await?;
    let results = session.search(query);
    tracing::info!(query, matches = results.len(), "search complete");
    print_json(&results)
}

pub(crate) async fn run_add(attrs: GameAttributes) -> Result<()> {
    let mut session = open_session().await?;
    let item = session.add_attributes(attrs).await?;
    print_json(&item)
}

pub(crate) async fn run_update(id: &str, patch: GamePatch) -> Result<()> {
    if patch.is_empty() {
        bail!("nothing to update: pass at least one field flag");
    }
    let mut session = open_session().await?;
    let item = session.update_game(id, patch).await?;
    print_json(&item)
}

pub(crate) async fn run_delete(id: &str) -> Result<()> {
    let mut session = open_session().await?;
    session.delete_game(id).await?;
    print_json(&json!({ "deleted": id }))
}
