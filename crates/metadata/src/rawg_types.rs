use chrono::NaiveDate;
use gamedex_core::MetadataCandidate;
use serde::Deserialize;

#[derive(Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub results: Option<Vec<RawgGame>>,
}

#[derive(Deserialize)]
pub(crate) struct RawgGame {
    pub name: String,
    pub background_image: Option<String>,
    pub released: Option<String>,
    #[serde(default)]
    pub platforms: Option<Vec<PlatformEntry>>,
    #[serde(default)]
    pub genres: Option<Vec<NamedRef>>,
    #[serde(default)]
    pub description_raw: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Deserialize)]
pub(crate) struct PlatformEntry {
    pub platform: NamedRef,
}

#[derive(Deserialize)]
pub(crate) struct NamedRef {
    pub name: String,
}

impl From<RawgGame> for MetadataCandidate {
    fn from(game: RawgGame) -> Self {
        let released = game.released.as_deref().and_then(|date| {
            NaiveDate::parse_from_str(date, "%Y-%m-%d")
                .inspect_err(|e| {
                    tracing::warn!(game = %game.name, released = %date, error = %e, "unparseable release date");
                })
                .ok()
        });
        Self {
            released,
            background_image: game.background_image.filter(|url| !url.trim().is_empty()),
            platforms: game
                .platforms
                .unwrap_or_default()
                .into_iter()
                .map(|entry| entry.platform.name)
                .collect(),
            genres: game.genres.unwrap_or_default().into_iter().map(|g| g.name).collect(),
            description: game.description_raw.or(game.description),
            name: game.name,
        }
    }
}
