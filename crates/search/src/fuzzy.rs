//! Approximate string distance in `[0, 1]`, `0` being a perfect match.
//!
//! Inputs are folded text (see [`crate::fold`]). The distance is the best of
//! a whole-string comparison and a token-order-insensitive comparison, so
//! both `"catn"` vs `"catan"` and `"ride ticket"` vs `"ticket to ride"` score
//! well.

use crate::text::tokens;

/// Ceiling of the distance given to a plain substring hit; shorter fields
/// (where the query covers more of the text) land closer to zero.
const SUBSTRING_DISTANCE: f64 = 0.1;

/// Similarity floor for a query token that is a prefix of a field token.
const PREFIX_SIMILARITY: f64 = 0.9;

/// Similarity floor for a query token found inside a field token.
const INFIX_SIMILARITY: f64 = 0.8;

/// Distance between a folded query and a folded field value.
#[must_use]
pub fn field_distance(query: &str, field: &str) -> f64 {
    if query.is_empty() || field.is_empty() {
        return 1.0;
    }
    if query == field {
        return 0.0;
    }
    if field.contains(query) {
        return SUBSTRING_DISTANCE * (1.0 - coverage(query, field));
    }
    let whole = 1.0 - strsim::normalized_levenshtein(query, field);
    whole.min(token_distance(query, field))
}

fn coverage(part: &str, whole: &str) -> f64 {
    let part_len = part.chars().count() as f64;
    let whole_len = whole.chars().count().max(1) as f64;
    (part_len / whole_len).min(1.0)
}

/// Mean over query tokens of the distance to their closest field token.
fn token_distance(query: &str, field: &str) -> f64 {
    let query_tokens = tokens(query);
    let field_tokens = tokens(field);
    if query_tokens.is_empty() || field_tokens.is_empty() {
        return 1.0;
    }
    let total: f64 = query_tokens
        .iter()
        .map(|q| field_tokens.iter().map(|f| token_similarity(q, f)).fold(0.0, f64::max))
        .sum();
    1.0 - total / query_tokens.len() as f64
}

fn token_similarity(query_token: &str, field_token: &str) -> f64 {
    if query_token == field_token {
        1.0
    } else if field_token.starts_with(query_token) {
        PREFIX_SIMILARITY + (1.0 - PREFIX_SIMILARITY) * coverage(query_token, field_token)
    } else if field_token.contains(query_token) {
        INFIX_SIMILARITY + (PREFIX_SIMILARITY - INFIX_SIMILARITY) * coverage(query_token, field_token)
    } else {
        strsim::normalized_levenshtein(query_token, field_token)
    }
}
