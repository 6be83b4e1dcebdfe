pub mod error;

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use tracing::{debug, info};

use crate::{
    constants::{
        DEFAULT_CONFIG_CANDIDATES, ENV_AUTO_ADVANCE, ENV_CONFIG_JSON,
        ENV_CONFIG_PATH, ENV_ITEMS_PER_VIEW, ENV_SWIPE_THRESHOLD,
    },
    models::{CarouselConfig, Config, ConfigMetadata, ConfigSource},
    validation::{ConfigWarnings, apply_guard_rails},
};
use error::ConfigLoadError;

/// A loaded configuration together with the non-fatal findings about it.
#[derive(Debug, Clone)]
pub struct ConfigLoad {
    pub config: Config,
    pub warnings: ConfigWarnings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EnvFileMode {
    Skip,
    Default,
}

/// Layered configuration loader.
///
/// Evaluation order:
/// 1) `.env` (unless disabled or an explicit file is given),
/// 2) `$MARQUEE_CONFIG_PATH` (TOML or JSON file),
/// 3) `$MARQUEE_CONFIG_JSON` (inline JSON),
/// 4) the first default candidate file under the search root,
/// 5) built-in defaults,
///
/// then per-field environment overrides and guard rails.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    env_file: Option<PathBuf>,
    env_file_mode: EnvFileMode,
    search_root: PathBuf,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self {
            env_file: None,
            env_file_mode: EnvFileMode::Default,
            search_root: PathBuf::from("."),
        }
    }

    /// Read variables from a specific `.env` file instead of the default
    /// lookup.
    pub fn with_env_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.env_file = Some(path.into());
        self
    }

    /// Do not read any `.env` file.
    pub fn without_env_file(mut self) -> Self {
        self.env_file = None;
        self.env_file_mode = EnvFileMode::Skip;
        self
    }

    /// Directory the default candidate files are resolved against.
    pub fn with_search_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.search_root = root.into();
        self
    }

    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let env_file_loaded = self.load_env_file()?;

        let (mut carousel, source) = self.load_carousel()?;
        let overrides = apply_env_overrides(&mut carousel)?;

        let config = Config {
            carousel,
            metadata: ConfigMetadata {
                source,
                env_file_loaded,
                overrides,
            },
        };

        let warnings = apply_guard_rails(&config)?;
        info!(
            items_per_view = config.carousel.items_per_view,
            auto_advance = %humantime::format_duration(config.carousel.auto_advance),
            swipe_threshold = config.carousel.swipe_threshold,
            source = ?config.metadata.source,
            "carousel configuration loaded"
        );

        Ok(ConfigLoad { config, warnings })
    }

    fn load_env_file(&self) -> Result<bool, ConfigLoadError> {
        if let Some(path) = &self.env_file {
            dotenvy::from_path(path)?;
            debug!(path = %path.display(), "loaded env file");
            return Ok(true);
        }
        if self.env_file_mode == EnvFileMode::Skip {
            return Ok(false);
        }
        match dotenvy::dotenv() {
            Ok(path) => {
                debug!(path = %path.display(), "loaded env file");
                Ok(true)
            }
            Err(err) if err.not_found() => Ok(false),
            Err(err) => Err(err.into()),
        }
    }

    fn load_carousel(
        &self,
    ) -> Result<(CarouselConfig, ConfigSource), ConfigLoadError> {
        if let Some(path_str) = non_empty_var(ENV_CONFIG_PATH) {
            let path = PathBuf::from(path_str);
            let config = load_from_file(&path)?;
            return Ok((config, ConfigSource::EnvPath(path)));
        }

        if let Some(raw) = non_empty_var(ENV_CONFIG_JSON) {
            let config = serde_json::from_str(&raw).map_err(|source| {
                ConfigLoadError::InlineJson {
                    key: ENV_CONFIG_JSON,
                    source,
                }
            })?;
            return Ok((config, ConfigSource::EnvInline));
        }

        if let Some(path) = self.find_default_file() {
            let config = load_from_file(&path)?;
            return Ok((config, ConfigSource::File(path)));
        }

        Ok((CarouselConfig::default(), ConfigSource::Default))
    }

    fn find_default_file(&self) -> Option<PathBuf> {
        DEFAULT_CONFIG_CANDIDATES
            .iter()
            .map(|candidate| self.search_root.join(candidate))
            .find(|path| path.exists())
    }
}

pub fn load_from_file(path: &Path) -> Result<CarouselConfig, ConfigLoadError> {
    let contents =
        fs::read_to_string(path).map_err(|source| ConfigLoadError::FileIo {
            path: path.to_path_buf(),
            source,
        })?;

    let parse_error = |source: anyhow::Error| ConfigLoadError::Parse {
        path: path.to_path_buf(),
        source,
    };

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_str(&contents)
            .map_err(|err| parse_error(err.into())),
        Some("toml") | Some("tml") => {
            toml::from_str(&contents).map_err(|err| parse_error(err.into()))
        }
        _ => CarouselConfig::parse_from_str(
            &contents,
            &path.display().to_string(),
        )
        .map_err(parse_error),
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn apply_env_overrides(
    carousel: &mut CarouselConfig,
) -> Result<Vec<&'static str>, ConfigLoadError> {
    let mut applied = Vec::new();

    if let Some(raw) = non_empty_var(ENV_ITEMS_PER_VIEW) {
        carousel.items_per_view = raw.trim().parse().map_err(
            |err: std::num::ParseIntError| ConfigLoadError::InvalidOverride {
                key: ENV_ITEMS_PER_VIEW,
                value: raw.clone(),
                reason: err.to_string(),
            },
        )?;
        applied.push(ENV_ITEMS_PER_VIEW);
    }

    if let Some(raw) = non_empty_var(ENV_AUTO_ADVANCE) {
        carousel.auto_advance = humantime::parse_duration(raw.trim())
            .map_err(|err| ConfigLoadError::InvalidOverride {
                key: ENV_AUTO_ADVANCE,
                value: raw.clone(),
                reason: err.to_string(),
            })?;
        applied.push(ENV_AUTO_ADVANCE);
    }

    if let Some(raw) = non_empty_var(ENV_SWIPE_THRESHOLD) {
        carousel.swipe_threshold = raw.trim().parse().map_err(
            |err: std::num::ParseFloatError| ConfigLoadError::InvalidOverride {
                key: ENV_SWIPE_THRESHOLD,
                value: raw.clone(),
                reason: err.to_string(),
            },
        )?;
        applied.push(ENV_SWIPE_THRESHOLD);
    }

    if !applied.is_empty() {
        debug!(overrides = ?applied, "environment overrides applied");
    }

    Ok(applied)
}
