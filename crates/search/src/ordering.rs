use std::collections::BTreeMap;

use gamedex_core::{CatalogItem, UNCATEGORIZED, is_empty_text};

use crate::text::fold;

/// Items ordered alphabetically by title, ignoring case and accents.
/// Equal titles keep their relative order.
#[must_use]
pub fn sorted_by_title(collection: &[CatalogItem]) -> Vec<CatalogItem> {
    let mut sorted = collection.to_vec();
    sorted.sort_by_cached_key(|item| fold(item.title()));
    sorted
}

/// Items grouped by category; items without one fall into
/// [`UNCATEGORIZED`]. Within a group, collection order is preserved.
#[must_use]
pub fn group_by_category(collection: &[CatalogItem]) -> BTreeMap<String, Vec<CatalogItem>> {
    let mut groups: BTreeMap<String, Vec<CatalogItem>> = BTreeMap::new();
    for item in collection {
        let category = item.attributes.category.as_deref();
        let key = if is_empty_text(category) {
            UNCATEGORIZED.to_owned()
        } else {
            category.unwrap_or(UNCATEGORIZED).trim().to_owned()
        };
        groups.entry(key).or_default().push(item.clone());
    }
    groups
}
