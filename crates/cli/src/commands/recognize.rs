use std::path::Path;

use anyhow::Result;
use gamedex_core::{LlmConfig, MetadataConfig, PLATFORMS};
use gamedex_metadata::{MetadataLookup, RawgClient, select_best_match};
use gamedex_service::RecognitionService;
use serde_json::json;

use crate::{open_session, print_json};

pub(crate) async fn run(image: &Path, save: bool) -> Result<()> {
    let service = RecognitionService::from_config(&LlmConfig::from_env(), &MetadataConfig::from_env())?;
    let attrs = service.recognize_file(image).await?;
    if save {
        let mut session = open_session().await?;
        let item = session.add_attributes(attrs).await?;
        print_json(&item)
    } else {
        print_json(&attrs)
    }
}

pub(crate) async fn run_lookup(title: &str) -> Result<()> {
    let client = RawgClient::new(&MetadataConfig::from_env())?;
    let candidates = client.search_games(title).await?;
    match select_best_match(title, &candidates) {
        Some(best) => print_json(&best.to_attributes()),
        None => {
            tracing::info!(title, "no metadata match");
            print_json(&serde_json::Value::Null)
        },
    }
}

pub(crate) fn run_platforms() -> Result<()> {
    let platforms: Vec<_> =
        PLATFORMS.iter().map(|p| json!({ "value": p.value, "label": p.label })).collect();
    print_json(&platforms)
}
