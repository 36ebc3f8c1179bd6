//! Candidates returned by the games metadata lookup.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{GameAttributes, LIST_SEPARATOR, VIDEO_GAME_CATEGORY};

/// One lookup result. Lives only for the duration of an enrichment call and
/// is never persisted directly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataCandidate {
    pub name: String,
    pub background_image: Option<String>,
    pub released: Option<NaiveDate>,
    #[serde(default)]
    pub platforms: Vec<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl MetadataCandidate {
    #[must_use]
    pub fn release_year(&self) -> Option<i32> {
        self.released.map(|d| d.year())
    }

    /// First listed platform, if any.
    #[must_use]
    pub fn primary_platform(&self) -> Option<&str> {
        self.platforms.iter().map(String::as_str).find(|p| !p.trim().is_empty())
    }

    /// All genre names joined into one text field.
    #[must_use]
    pub fn joined_genres(&self) -> Option<String> {
        join_names(&self.genres)
    }

    /// Projects the candidate into a full attribute record for manual entry.
    #[must_use]
    pub fn to_attributes(&self) -> GameAttributes {
        GameAttributes {
            title: self.name.clone(),
            description: self.description.clone().filter(|d| !d.trim().is_empty()),
            category: Some(VIDEO_GAME_CATEGORY.to_owned()),
            genre: self.joined_genres(),
            platform: join_names(&self.platforms),
            year: self.release_year(),
            image_url: self.background_image.clone(),
        }
    }
}

fn join_names(names: &[String]) -> Option<String> {
    let joined = names
        .iter()
        .map(|n| n.trim())
        .filter(|n| !n.is_empty())
        .collect::<Vec<_>>()
        .join(LIST_SEPARATOR);
    if joined.is_empty() { None } else { Some(joined) }
}
