//! Weighted fuzzy ranking of catalog items against a free-text query.

use std::borrow::Cow;
use std::cmp::Ordering;

use gamedex_core::CatalogItem;

use crate::fuzzy::field_distance;
use crate::text::fold;

/// Catalog fields considered by the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Title,
    Description,
    Category,
    Genre,
    Platform,
    Year,
}

impl SearchField {
    fn value(self, item: &CatalogItem) -> Option<Cow<'_, str>> {
        let attrs = &item.attributes;
        match self {
            Self::Title => Some(Cow::Borrowed(attrs.title.as_str())),
            Self::Description => attrs.description.as_deref().map(Cow::Borrowed),
            Self::Category => attrs.category.as_deref().map(Cow::Borrowed),
            Self::Genre => attrs.genre.as_deref().map(Cow::Borrowed),
            Self::Platform => attrs.platform.as_deref().map(Cow::Borrowed),
            Self::Year => attrs.year.map(|y| Cow::Owned(y.to_string())),
        }
    }
}

/// Field weights and the match tolerance.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    pub keys: Vec<(SearchField, f64)>,
    /// Maximum field distance still counted as a match.
    pub threshold: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            keys: vec![
                (SearchField::Title, 0.5),
                (SearchField::Description, 0.15),
                (SearchField::Category, 0.1),
                (SearchField::Genre, 0.1),
                (SearchField::Platform, 0.1),
                (SearchField::Year, 0.05),
            ],
            threshold: 0.3,
        }
    }
}

/// How an item matched, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MatchTier {
    /// Title equals the query, ignoring case and accents.
    ExactTitle,
    /// Some field contains the query verbatim.
    Substring,
    /// Only approximate matches within tolerance.
    Fuzzy,
}

/// A ranked search result borrowing from the searched collection.
#[derive(Debug, Clone, Copy)]
pub struct SearchHit<'a> {
    pub item: &'a CatalogItem,
    pub tier: MatchTier,
    /// Weighted distance; lower is better.
    pub score: f64,
    position: usize,
}

impl SearchHit<'_> {
    fn cmp_rank(&self, other: &Self) -> Ordering {
        self.tier
            .cmp(&other.tier)
            .then_with(|| self.score.total_cmp(&other.score))
            .then_with(|| self.position.cmp(&other.position))
    }
}

/// Ranks `collection` against `query`.
///
/// Items without any field within `config.threshold` are excluded. Each
/// matching field contributes `distance ^ weight` to a product (an exact
/// field match counts as `f64::EPSILON`), so heavier fields and more
/// matching fields both pull the score down. Results are ordered by tier,
/// then score, then position in `collection`, which makes the output
/// deterministic.
#[must_use]
pub fn rank<'a>(collection: &'a [CatalogItem], query: &str, config: &SearchConfig) -> Vec<SearchHit<'a>> {
    let query = fold(query);
    if query.is_empty() {
        return Vec::new();
    }
    let total_weight: f64 = config.keys.iter().map(|(_, w)| w).sum::<f64>().max(f64::EPSILON);

    let mut hits: Vec<SearchHit<'a>> = collection
        .iter()
        .enumerate()
        .filter_map(|(position, item)| score_item(item, &query, config, total_weight, position))
        .collect();
    hits.sort_by(SearchHit::cmp_rank);
    tracing::debug!(query = %query, matches = hits.len(), total = collection.len(), "catalog search ranked");
    hits
}

fn score_item<'a>(
    item: &'a CatalogItem,
    query: &str,
    config: &SearchConfig,
    total_weight: f64,
    position: usize,
) -> Option<SearchHit<'a>> {
    let mut score = 1.0_f64;
    let mut matched = false;
    let mut substring = false;

    for (field, weight) in &config.keys {
        let Some(value) = field.value(item) else {
            continue;
        };
        let value = fold(&value);
        let distance = field_distance(query, &value);
        if distance > config.threshold {
            continue;
        }
        matched = true;
        substring |= value.contains(query);
        // An exact hit on any field drives its factor to EPSILON, so within a
        // tier it outranks a partial title hit despite the lower weight.
        score *= distance.max(f64::EPSILON).powf(weight / total_weight);
    }

    if !matched {
        return None;
    }
    let tier = if fold(&item.attributes.title) == query {
        MatchTier::ExactTitle
    } else if substring {
        MatchTier::Substring
    } else {
        MatchTier::Fuzzy
    };
    Some(SearchHit { item, tier, score, position })
}

/// Free-text search over the collection, best match first.
///
/// A blank query returns the collection unchanged, in its existing order.
#[must_use]
pub fn search(collection: &[CatalogItem], query: &str) -> Vec<CatalogItem> {
    search_with(collection, query, &SearchConfig::default())
}

/// [`search`] with explicit weights and tolerance.
#[must_use]
pub fn search_with(collection: &[CatalogItem], query: &str, config: &SearchConfig) -> Vec<CatalogItem> {
    if query.trim().is_empty() {
        return collection.to_vec();
    }
    rank(collection, query, config).into_iter().map(|hit| hit.item.clone()).collect()
}

#[cfg(test)]
#[path = "rank_tests.rs"]
mod tests;
