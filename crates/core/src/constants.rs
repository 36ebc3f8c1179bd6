//! Shared constants for gamedex.

/// Number of characters of a raw model response kept in extraction diagnostics.
pub const DIAGNOSTIC_PREFIX_CHARS: usize = 200;

/// Bucket name for catalog items without a category.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Category assigned when projecting a metadata candidate into attributes.
pub const VIDEO_GAME_CATEGORY: &str = "Video Game";

/// Separator used when a list of names is stored in a single text field.
pub const LIST_SEPARATOR: &str = ", ";

/// Default chat completions host.
pub const DEFAULT_LLM_BASE_URL: &str = "https://api.openai.com";

/// Default vision-capable model.
pub const DEFAULT_LLM_MODEL: &str = "gpt-4o";

/// Default games metadata API root.
pub const DEFAULT_METADATA_BASE_URL: &str = "https://api.rawg.io/api";

/// Number of candidates requested per metadata search.
pub const DEFAULT_METADATA_PAGE_SIZE: u32 = 10;

/// Network timeout for collaborator calls, in seconds.
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 60;

/// Catalog database pool size. The catalog is single-user, so this stays small.
pub const PG_POOL_MAX_CONNECTIONS: u32 = 5;

/// Seconds to wait for a pooled connection.
pub const PG_POOL_ACQUIRE_TIMEOUT_SECS: u64 = 10;

/// A platform value as stored, with its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Platform {
    pub value: &'static str,
    pub label: &'static str,
}

/// Known platforms offered for manual entry.
pub const PLATFORMS: &[Platform] = &[
    Platform { value: "PC", label: "PC" },
    Platform { value: "PS1", label: "PlayStation 1" },
    Platform { value: "PS2", label: "PlayStation 2" },
    Platform { value: "PS3", label: "PlayStation 3" },
    Platform { value: "PS4", label: "PlayStation 4" },
    Platform { value: "PS5", label: "PlayStation 5" },
    Platform { value: "Xbox", label: "Xbox" },
    Platform { value: "Xbox 360", label: "Xbox 360" },
    Platform { value: "Xbox One", label: "Xbox One" },
    Platform { value: "Xbox Series X/S", label: "Xbox Series X/S" },
    Platform { value: "Nintendo Switch", label: "Nintendo Switch" },
    Platform { value: "Nintendo Wii", label: "Nintendo Wii" },
    Platform { value: "Nintendo Wii U", label: "Nintendo Wii U" },
    Platform { value: "Nintendo 3DS", label: "Nintendo 3DS" },
    Platform { value: "Nintendo DS", label: "Nintendo DS" },
    Platform { value: "Game Boy", label: "Game Boy" },
    Platform { value: "Mobile", label: "Mobile" },
    Platform { value: "Other", label: "Other" },
];
