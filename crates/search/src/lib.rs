//! Fuzzy search over the in-memory game catalog
//!
//! Pure, side-effect-free views of a loaded collection:
//! 1. `search(items, query)` → ranked fuzzy matches (identity for a blank query)
//! 2. `sorted_by_title(items)` → alphabetical order, case- and accent-insensitive
//! 3. `group_by_category(items)` → category buckets with an "Uncategorized" fallback

mod fuzzy;
mod ordering;
mod rank;
mod text;

pub use fuzzy::field_distance;
pub use ordering::{group_by_category, sorted_by_title};
pub use rank::{MatchTier, SearchConfig, SearchField, SearchHit, rank, search, search_with};
pub use text::fold;
