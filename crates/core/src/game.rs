//! Game records: transient recognition attributes and persisted catalog items.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{LIST_SEPARATOR, ValidationError};

/// Attributes describing one physical game.
///
/// Produced by recognition and persisted per catalog item. `year` is the
/// canonical integer release year; every boundary (model output, metadata
/// lookup, storage) normalizes into it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameAttributes {
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl GameAttributes {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into(), ..Self::default() }
    }

    /// Coerces an untyped JSON object (as returned by a language model) into
    /// attributes.
    ///
    /// String fields accept strings, numbers and arrays of strings (joined);
    /// blank values become `None`. `year` accepts integers, integral floats
    /// and strings that start with a four-digit year. Unknown keys are ignored.
    #[must_use]
    pub fn from_json_object(object: &Map<String, Value>) -> Self {
        let text = |key: &str| object.get(key).and_then(coerce_text);
        Self {
            title: text("title").unwrap_or_default(),
            description: text("description"),
            category: text("category"),
            genre: text("genre"),
            platform: text("platform"),
            year: object.get("year").and_then(normalize_year),
            image_url: text("image_url"),
        }
    }

    #[must_use]
    pub fn has_title(&self) -> bool {
        !self.title.trim().is_empty()
    }

    /// True when no attribute carries any information.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        !self.has_title()
            && [&self.description, &self.category, &self.genre, &self.platform, &self.image_url]
                .iter()
                .all(|f| is_empty_text(f.as_deref()))
            && self.year.is_none()
    }
}

/// True for `None` and for strings that are empty after trimming.
#[must_use]
pub fn is_empty_text(value: Option<&str>) -> bool {
    value.is_none_or(|s| s.trim().is_empty())
}

fn coerce_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s.trim().to_owned(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => items
            .iter()
            .filter_map(|item| item.as_str().map(str::trim))
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(LIST_SEPARATOR),
        Value::Null | Value::Bool(_) | Value::Object(_) => return None,
    };
    if text.is_empty() { None } else { Some(text) }
}

/// Normalizes a JSON year value into the canonical integer form.
#[must_use]
pub fn normalize_year(value: &Value) -> Option<i32> {
    match value {
        Value::Number(n) => {
            let year = match n.as_i64() {
                Some(i) => i,
                None => {
                    let f = n.as_f64()?;
                    if f.fract() != 0.0 {
                        return None;
                    }
                    // integral, and range-checked below
                    f as i64
                },
            };
            i32::try_from(year).ok().filter(|y| (1000..=9999).contains(y))
        },
        Value::String(s) => parse_year_text(s),
        _ => None,
    }
}

/// Parses a year from text that starts with exactly four digits, such as
/// `"1995"` or the `"1995-03-01"` release-date form.
#[must_use]
pub fn parse_year_text(text: &str) -> Option<i32> {
    let text = text.trim();
    let digits: String = text.chars().take_while(char::is_ascii_digit).collect();
    if digits.len() != 4 {
        return None;
    }
    digits.parse::<i32>().ok().filter(|y| *y >= 1000)
}

/// A game stored in the catalog.
///
/// `id` is assigned by storage and never changes; timestamps are maintained
/// by storage with `updated_at >= created_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: String,
    #[serde(flatten)]
    pub attributes: GameAttributes,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CatalogItem {
    #[must_use]
    pub fn title(&self) -> &str {
        &self.attributes.title
    }
}

/// Attributes validated for insertion: the title is present and trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NewGame(GameAttributes);

impl NewGame {
    #[must_use]
    pub const fn attributes(&self) -> &GameAttributes {
        &self.0
    }
}

impl TryFrom<GameAttributes> for NewGame {
    type Error = ValidationError;

    fn try_from(mut attributes: GameAttributes) -> Result<Self, Self::Error> {
        if !attributes.has_title() {
            return Err(ValidationError::EmptyTitle);
        }
        attributes.title = attributes.title.trim().to_owned();
        Ok(Self(attributes))
    }
}

/// Partial update of a catalog item. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GamePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl GamePatch {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Rejects a patch that would blank out the title.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match &self.title {
            Some(title) if title.trim().is_empty() => Err(ValidationError::EmptyTitle),
            _ => Ok(()),
        }
    }

    /// Applies every field present in the patch.
    pub fn apply_to(&self, attributes: &mut GameAttributes) {
        if let Some(title) = &self.title {
            attributes.title = title.trim().to_owned();
        }
        overwrite(&mut attributes.description, &self.description);
        overwrite(&mut attributes.category, &self.category);
        overwrite(&mut attributes.genre, &self.genre);
        overwrite(&mut attributes.platform, &self.platform);
        overwrite(&mut attributes.year, &self.year);
        overwrite(&mut attributes.image_url, &self.image_url);
    }
}

fn overwrite<T: Clone>(target: &mut Option<T>, value: &Option<T>) {
    if let Some(v) = value {
        *target = Some(v.clone());
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod tests;
