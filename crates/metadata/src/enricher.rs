//! Fills in recognition attributes from the games metadata lookup.
//!
//! The vision model is trusted for taxonomy fields, the metadata source for
//! canonical artwork. [`MERGE_POLICY`] encodes that per field.

use std::sync::Arc;

use gamedex_core::{GameAttributes, MetadataCandidate, is_empty_text};

use crate::client::MetadataLookup;
use crate::error::MetadataError;
use crate::matching::select_best_match;

/// How a candidate value is merged into existing attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergePolicy {
    /// Replace the current value whenever the candidate has one.
    OverwriteIfPresent,
    /// Only set the value when the current one is empty.
    FillIfEmpty,
}

/// Attributes the enricher may touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrichedField {
    ImageUrl,
    Platform,
    Genre,
    Year,
}

pub const MERGE_POLICY: [(EnrichedField, MergePolicy); 4] = [
    (EnrichedField::ImageUrl, MergePolicy::OverwriteIfPresent),
    (EnrichedField::Platform, MergePolicy::FillIfEmpty),
    (EnrichedField::Genre, MergePolicy::FillIfEmpty),
    (EnrichedField::Year, MergePolicy::FillIfEmpty),
];

enum FieldValue {
    Text(String),
    Year(i32),
}

impl EnrichedField {
    fn candidate_value(self, candidate: &MetadataCandidate) -> Option<FieldValue> {
        match self {
            Self::ImageUrl => candidate
                .background_image
                .as_deref()
                .filter(|url| !url.trim().is_empty())
                .map(|url| FieldValue::Text(url.to_owned())),
            Self::Platform => candidate.primary_platform().map(|p| FieldValue::Text(p.to_owned())),
            Self::Genre => candidate.joined_genres().map(FieldValue::Text),
            Self::Year => candidate.release_year().map(FieldValue::Year),
        }
    }

    fn is_empty_in(self, attrs: &GameAttributes) -> bool {
        match self {
            Self::ImageUrl => is_empty_text(attrs.image_url.as_deref()),
            Self::Platform => is_empty_text(attrs.platform.as_deref()),
            Self::Genre => is_empty_text(attrs.genre.as_deref()),
            Self::Year => attrs.year.is_none(),
        }
    }

    fn assign(self, attrs: &mut GameAttributes, value: FieldValue) {
        match (self, value) {
            (Self::ImageUrl, FieldValue::Text(v)) => attrs.image_url = Some(v),
            (Self::Platform, FieldValue::Text(v)) => attrs.platform = Some(v),
            (Self::Genre, FieldValue::Text(v)) => attrs.genre = Some(v),
            (Self::Year, FieldValue::Year(y)) => attrs.year = Some(y),
            (field, _) => tracing::warn!(?field, "mismatched value kind, field left unchanged"),
        }
    }
}

/// Applies [`MERGE_POLICY`] uniformly: each field takes the candidate's
/// value according to its policy.
pub fn apply_merge_policy(attrs: &mut GameAttributes, candidate: &MetadataCandidate) {
    for (field, policy) in MERGE_POLICY {
        let Some(value) = field.candidate_value(candidate) else {
            continue;
        };
        let write = match policy {
            MergePolicy::OverwriteIfPresent => true,
            MergePolicy::FillIfEmpty => field.is_empty_in(attrs),
        };
        if write {
            field.assign(attrs, value);
        }
    }
}

/// Augments extracted attributes with the best metadata match.
#[derive(Clone)]
pub struct MetadataEnricher {
    lookup: Arc<dyn MetadataLookup>,
}

impl MetadataEnricher {
    #[must_use]
    pub fn new(lookup: Arc<dyn MetadataLookup>) -> Self {
        Self { lookup }
    }

    /// Enriches `attrs` using the lookup result for `title`.
    ///
    /// Never fails: with no candidates, or on any lookup error, `attrs` is
    /// returned unchanged (errors are logged).
    pub async fn enrich(&self, title: &str, attrs: GameAttributes) -> GameAttributes {
        match self.try_enrich(title, &attrs).await {
            Ok(Some(enriched)) => enriched,
            Ok(None) => {
                tracing::debug!(title, "no metadata candidates, attributes unchanged");
                attrs
            },
            Err(e) => {
                tracing::warn!(title, error = %e, "metadata enrichment failed, keeping extracted attributes");
                attrs
            },
        }
    }

    async fn try_enrich(
        &self,
        title: &str,
        attrs: &GameAttributes,
    ) -> Result<Option<GameAttributes>, MetadataError> {
        let candidates = self.lookup.search_games(title).await?;
        let Some(best) = select_best_match(title, &candidates) else {
            return Ok(None);
        };
        tracing::debug!(title, matched = %best.name, "metadata match selected");
        let mut enriched = attrs.clone();
        apply_merge_policy(&mut enriched, best);
        Ok(Some(enriched))
    }
}

impl std::fmt::Debug for MetadataEnricher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MetadataEnricher").finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "enricher_tests.rs"]
mod tests;
