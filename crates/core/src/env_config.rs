//! Environment lookups shared by the config builders.
//!
//! Unset and blank variables are both "absent"; an unparseable value is
//! logged at warn and replaced by the default.

use std::fmt::Display;
use std::str::FromStr;

/// Trimmed value of `var`, or `None` when unset or blank.
#[must_use]
pub fn env_non_empty(var: &str) -> Option<String> {
    std::env::var(var).ok().map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

/// Parses `var`, falling back to `default` when absent or invalid.
pub fn env_parse_with_default<T: FromStr + Display>(var: &str, default: T) -> T {
    let Some(raw) = env_non_empty(var) else {
        return default;
    };
    raw.parse().unwrap_or_else(|_| {
        tracing::warn!(var, value = %raw, default = %default, "invalid env var value, using default");
        default
    })
}
