use marquee_core::SettingsError;
use std::time::Duration;
use thiserror::Error;

use super::models::Config;

#[derive(Debug, Error)]
pub enum ConfigGuardRailError {
    #[error("carousel settings rejected: {0}")]
    InvalidSettings(#[from] SettingsError),
}

#[derive(Debug, Clone)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, Default, Clone)]
pub struct ConfigWarnings {
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn push<S: Into<String>>(&mut self, message: S) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: None,
        });
    }

    pub fn push_with_hint<S: Into<String>, H: Into<String>>(
        &mut self,
        message: S,
        hint: H,
    ) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

const MIN_COMFORTABLE_INTERVAL: Duration = Duration::from_secs(2);
const MAX_COMFORTABLE_ITEMS_PER_VIEW: usize = 6;
const MAX_COMFORTABLE_SWIPE_THRESHOLD: f32 = 300.0;

pub fn apply_guard_rails(
    config: &Config,
) -> Result<ConfigWarnings, ConfigGuardRailError> {
    let settings = config.carousel_settings()?;
    let mut warnings = ConfigWarnings::default();

    if settings.auto_advance() < MIN_COMFORTABLE_INTERVAL {
        warnings.push_with_hint(
            format!(
                "auto-advance every {} leaves little time to read a card",
                humantime::format_duration(settings.auto_advance())
            ),
            "Use an interval of at least 2s (MARQUEE_AUTO_ADVANCE)",
        );
    }

    if settings.swipe_threshold() == 0.0 {
        warnings.push_with_hint(
            "swipe threshold is 0; every touch that moves will change slides",
            "Set MARQUEE_SWIPE_THRESHOLD to a small distance such as 50",
        );
    } else if settings.swipe_threshold() > MAX_COMFORTABLE_SWIPE_THRESHOLD {
        warnings.push(format!(
            "swipe threshold {} may be wider than a phone screen; swipes may never register",
            settings.swipe_threshold()
        ));
    }

    if settings.items_per_view() > MAX_COMFORTABLE_ITEMS_PER_VIEW {
        warnings.push(format!(
            "{} cards per view will be cramped on narrow screens",
            settings.items_per_view()
        ));
    }

    Ok(warnings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CarouselConfig;

    fn config(carousel: CarouselConfig) -> Config {
        Config {
            carousel,
            ..Config::default()
        }
    }

    #[test]
    fn defaults_pass_without_warnings() {
        let warnings = apply_guard_rails(&Config::default()).unwrap();
        assert!(warnings.is_empty());
    }

    #[test]
    fn zero_items_per_view_is_fatal() {
        let err = apply_guard_rails(&config(CarouselConfig {
            items_per_view: 0,
            ..CarouselConfig::default()
        }))
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigGuardRailError::InvalidSettings(SettingsError::ZeroItemsPerView)
        ));
    }

    #[test]
    fn questionable_values_warn() {
        let warnings = apply_guard_rails(&config(CarouselConfig {
            items_per_view: 8,
            auto_advance: Duration::from_millis(500),
            swipe_threshold: 0.0,
        }))
        .unwrap();
        assert_eq!(warnings.len(), 3);
        assert!(warnings.items.iter().any(|w| w.message.contains("500ms")));
        assert!(warnings.items.iter().filter(|w| w.hint.is_some()).count() == 2);
    }
}
