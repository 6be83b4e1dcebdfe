/// Path to a TOML or JSON settings file.
pub const ENV_CONFIG_PATH: &str = "MARQUEE_CONFIG_PATH";
/// Inline JSON settings.
pub const ENV_CONFIG_JSON: &str = "MARQUEE_CONFIG_JSON";

pub const ENV_ITEMS_PER_VIEW: &str = "MARQUEE_ITEMS_PER_VIEW";
/// Humantime duration, e.g. `7s` or `1500ms`.
pub const ENV_AUTO_ADVANCE: &str = "MARQUEE_AUTO_ADVANCE";
pub const ENV_SWIPE_THRESHOLD: &str = "MARQUEE_SWIPE_THRESHOLD";

/// Every variable the loader reads, for tests and diagnostics.
pub const MANAGED_KEYS: &[&str] = &[
    ENV_CONFIG_PATH,
    ENV_CONFIG_JSON,
    ENV_ITEMS_PER_VIEW,
    ENV_AUTO_ADVANCE,
    ENV_SWIPE_THRESHOLD,
];

/// Settings files probed, relative to the search root, when neither
/// environment variable points at one.
pub const DEFAULT_CONFIG_CANDIDATES: &[&str] = &[
    "marquee.toml",
    "marquee.json",
    "config/marquee.toml",
    "config/marquee.json",
];
