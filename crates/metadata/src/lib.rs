//! Games metadata lookup and enrichment
//!
//! Queries a RAWG-compatible games database by title, picks the best match
//! and merges its artwork and taxonomy into recognized attributes.

mod client;
mod enricher;
mod error;
mod matching;
mod rawg_types;


pub use client::{MetadataLookup, RawgClient};
pub use enricher::{
    EnrichedField, MERGE_POLICY, MergePolicy, MetadataEnricher, apply_merge_policy,
};
pub use error::MetadataError;
pub use matching::select_best_match;
