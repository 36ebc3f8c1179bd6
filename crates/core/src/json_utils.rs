//! Tolerant extraction of a JSON object from language-model output.
//!
//! Model responses may be strict JSON, JSON inside a fenced code block, JSON
//! embedded in prose, or garbage. [`EXTRACTION_STRATEGIES`] is tried in
//! order and the first strategy that yields a JSON object wins.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};

use crate::{ExtractionFailure, GameAttributes};

static LEADING_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^```[ \t]*[a-z0-9_+-]*\s*").unwrap());
static TRAILING_FENCE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*```\s*$").unwrap());
static FENCE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?im)^[ \t]*```[ \t]*[a-z0-9_+-]*[ \t]*$").unwrap());

/// A pure parsing attempt over the raw response.
pub type ParseStrategy = fn(&str) -> Option<Map<String, Value>>;

/// Ordered fallback chain used by [`extract_json_object`].
pub const EXTRACTION_STRATEGIES: [(&str, ParseStrategy); 4] = [
    ("direct", parse_direct),
    ("fence_stripped", parse_fence_stripped),
    ("brace_span", parse_brace_span),
    ("cleaned", parse_cleaned),
];

/// Strips a leading fence marker (any language tag, case-insensitive) and a
/// trailing fence marker from the trimmed content.
#[must_use]
pub fn strip_markdown_json(content: &str) -> &str {
    let trimmed = content.trim();
    let start = LEADING_FENCE.find(trimmed).map_or(0, |m| m.end());
    let rest = trimmed.get(start..).unwrap_or("");
    let end = TRAILING_FENCE.find(rest).map_or(rest.len(), |m| m.start());
    rest.get(..end).unwrap_or(rest).trim()
}

/// Fence-stripped content with byte-order marks, zero-width characters and
/// stray fence lines removed.
#[must_use]
pub fn clean_response(content: &str) -> String {
    let stripped: String = strip_markdown_json(content)
        .chars()
        .filter(|c| !matches!(c, '\u{feff}' | '\u{200b}' | '\u{200c}' | '\u{200d}'))
        .collect();
    FENCE_LINE.replace_all(&stripped, "").trim().to_owned()
}

/// Parses `text` and accepts the result only if it is a JSON object.
#[must_use]
pub fn parse_json_object(text: &str) -> Option<Map<String, Value>> {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(map)) => Some(map),
        _ => None,
    }
}

/// Strategy 1: the trimmed response is itself a JSON object.
#[must_use]
pub fn parse_direct(raw: &str) -> Option<Map<String, Value>> {
    parse_json_object(raw.trim())
}

/// Strategy 2: the response is a fenced code block around a JSON object.
#[must_use]
pub fn parse_fence_stripped(raw: &str) -> Option<Map<String, Value>> {
    parse_json_object(strip_markdown_json(raw))
}

/// Strategy 3: a JSON object embedded in prose, taken from the first `{` to
/// the last `}` of the fence-stripped text.
///
/// Text that is already well-formed JSON is not prose, so a top-level array
/// or string is never mined for an inner object.
#[must_use]
pub fn parse_brace_span(raw: &str) -> Option<Map<String, Value>> {
    let stripped = strip_markdown_json(raw);
    if serde_json::from_str::<Value>(stripped).is_ok() {
        return None;
    }
    let start = stripped.find('{')?;
    let end = stripped.rfind('}')?;
    if end < start {
        return None;
    }
    parse_json_object(stripped.get(start..=end)?)
}

/// Strategy 4: the fully cleaned text.
#[must_use]
pub fn parse_cleaned(raw: &str) -> Option<Map<String, Value>> {
    parse_json_object(&clean_response(raw))
}

/// Runs the strategy chain over a raw model response.
///
/// # Errors
/// Returns [`ExtractionFailure`] with the first 200 characters of `raw` when
/// no strategy yields a JSON object.
pub fn extract_json_object(raw: &str) -> Result<Map<String, Value>, ExtractionFailure> {
    tracing::debug!(raw, "model response");
    for (name, strategy) in EXTRACTION_STRATEGIES {
        if let Some(object) = strategy(raw) {
            tracing::debug!(strategy = name, "extracted JSON object");
            return Ok(object);
        }
    }
    let failure = ExtractionFailure::from_raw(raw);
    tracing::warn!(raw_prefix = %failure.raw_prefix, "no extraction strategy produced a JSON object");
    Err(failure)
}

/// Extracts a JSON object and coerces it into [`GameAttributes`].
///
/// # Errors
/// See [`extract_json_object`].
pub fn extract_attributes(raw: &str) -> Result<GameAttributes, ExtractionFailure> {
    extract_json_object(raw).map(|object| GameAttributes::from_json_object(&object))
}

#[cfg(test)]
#[path = "json_utils_tests.rs"]
mod tests;
