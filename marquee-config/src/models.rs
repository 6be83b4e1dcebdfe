use marquee_core::{
    CarouselSettings, SettingsError,
    settings::{
        DEFAULT_AUTO_ADVANCE, DEFAULT_ITEMS_PER_VIEW, DEFAULT_SWIPE_THRESHOLD,
    },
};
use serde::{Deserialize, Serialize};
use std::{path::PathBuf, time::Duration};

/// Where the settings file came from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    #[default]
    Default,
    EnvPath(PathBuf),
    EnvInline,
    File(PathBuf),
}

#[derive(Debug, Clone, Default)]
pub struct ConfigMetadata {
    pub source: ConfigSource,
    pub env_file_loaded: bool,
    /// Environment variables that overrode a file or default value.
    pub overrides: Vec<&'static str>,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub carousel: CarouselConfig,
    pub metadata: ConfigMetadata,
}

impl Config {
    /// Validated settings for the carousel controller.
    pub fn carousel_settings(&self) -> Result<CarouselSettings, SettingsError> {
        self.carousel.to_settings()
    }
}

/// Carousel tuning as written in a settings file. Missing fields fall back to
/// the defaults.
///
/// ```toml
/// items_per_view = 2
/// auto_advance = "7s"
/// swipe_threshold = 50.0
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct CarouselConfig {
    /// Cards visible at once. Must be at least 1.
    pub items_per_view: usize,
    /// Delay between automatic advances, as a humantime string.
    #[serde(with = "humantime_duration")]
    pub auto_advance: Duration,
    /// Horizontal travel (in touch coordinates) a gesture has to exceed to
    /// count as a swipe.
    pub swipe_threshold: f32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            items_per_view: DEFAULT_ITEMS_PER_VIEW,
            auto_advance: DEFAULT_AUTO_ADVANCE,
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
        }
    }
}

impl CarouselConfig {
    pub fn to_settings(&self) -> Result<CarouselSettings, SettingsError> {
        CarouselSettings::new(
            self.items_per_view,
            self.auto_advance,
            self.swipe_threshold,
        )
    }

    /// Parse TOML first, then JSON.
    pub fn parse_from_str(
        contents: &str,
        origin: &str,
    ) -> anyhow::Result<Self> {
        toml::from_str(contents).or_else(|toml_err| {
            serde_json::from_str(contents).map_err(|json_err| {
                anyhow::anyhow!(
                    "failed to parse carousel config {}: toml error: {}; json error: {}",
                    origin,
                    toml_err,
                    json_err
                )
            })
        })
    }
}

mod humantime_duration {
    use serde::{Deserialize, Deserializer, Serializer, de::Error};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(
        value: &Duration,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&humantime::format_duration(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Duration, D::Error> {
        let raw = String::deserialize(deserializer)?;
        humantime::parse_duration(raw.trim()).map_err(D::Error::custom)
    }
}
