//! Replayable page event scripts
//!
//! ```toml
//! [[carousel]]
//! key = "organizers"
//! slides = ["Ada", "Grace", "Edsger", "Barbara"]
//!
//! [[event]]
//! at = "1500ms"
//! carousel = "organizers"
//! action = "hover-enter"
//!
//! [[event]]
//! at = "3s"
//! carousel = "organizers"
//! action = "swipe"
//! start_x = 320.0
//! end_x = 120.0
//!
//! [[event]]
//! at = "4s"
//! action = "hide"
//! ```

use std::{collections::HashSet, fs, path::Path, time::Duration};

use anyhow::Context;
use marquee_core::CarouselKey;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ScriptError {
    #[error("carousel '{0}' is declared more than once")]
    DuplicateCarousel(CarouselKey),
    #[error("event at {at:?} targets unknown carousel '{key}'")]
    UnknownCarousel { key: CarouselKey, at: Duration },
    #[error("event at {at:?} ({action}) needs a carousel")]
    MissingCarousel { action: &'static str, at: Duration },
}

/// A carousel mounted when the page loads.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CarouselSpec {
    pub key: CarouselKey,
    /// Overrides the configured items per view for this carousel only.
    #[serde(default)]
    pub items_per_view: Option<usize>,
    #[serde(default)]
    pub slides: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum ScriptAction {
    HoverEnter,
    HoverLeave,
    Swipe { start_x: f32, end_x: f32 },
    /// Page goes to the background.
    Hide,
    /// Page comes back to the foreground.
    Show,
    AddSlide { label: String },
    RemoveSlide,
    /// Without a carousel: the whole page unloads and replay stops.
    Unload,
}

impl ScriptAction {
    pub fn name(&self) -> &'static str {
        match self {
            Self::HoverEnter => "hover-enter",
            Self::HoverLeave => "hover-leave",
            Self::Swipe { .. } => "swipe",
            Self::Hide => "hide",
            Self::Show => "show",
            Self::AddSlide { .. } => "add-slide",
            Self::RemoveSlide => "remove-slide",
            Self::Unload => "unload",
        }
    }

    fn needs_carousel(&self) -> bool {
        !matches!(self, Self::Hide | Self::Show | Self::Unload)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScriptEvent {
    /// Offset from the start of the replay.
    #[serde(deserialize_with = "parse_humantime")]
    pub at: Duration,
    #[serde(default)]
    pub carousel: Option<CarouselKey>,
    #[serde(flatten)]
    pub action: ScriptAction,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EventScript {
    #[serde(default, rename = "carousel")]
    pub carousels: Vec<CarouselSpec>,
    #[serde(default, rename = "event")]
    pub events: Vec<ScriptEvent>,
}

impl EventScript {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path).with_context(|| {
            format!("failed to read event script {}", path.display())
        })?;
        Self::parse_from_str(&contents, &path.display().to_string())
    }

    /// Parse TOML first, then JSON, and validate the result.
    pub fn parse_from_str(contents: &str, origin: &str) -> anyhow::Result<Self> {
        let mut script: Self = toml::from_str(contents).or_else(|toml_err| {
            serde_json::from_str(contents).map_err(|json_err| {
                anyhow::anyhow!(
                    "failed to parse event script {}: toml error: {}; json error: {}",
                    origin,
                    toml_err,
                    json_err
                )
            })
        })?;
        script
            .validate()
            .with_context(|| format!("invalid event script {origin}"))?;
        script.events.sort_by_key(|event| event.at);
        Ok(script)
    }

    pub fn validate(&self) -> Result<(), ScriptError> {
        let mut keys = HashSet::new();
        for spec in &self.carousels {
            if !keys.insert(&spec.key) {
                return Err(ScriptError::DuplicateCarousel(spec.key.clone()));
            }
        }

        for event in &self.events {
            match &event.carousel {
                Some(key) if !keys.contains(key) => {
                    return Err(ScriptError::UnknownCarousel {
                        key: key.clone(),
                        at: event.at,
                    });
                }
                None if event.action.needs_carousel() => {
                    return Err(ScriptError::MissingCarousel {
                        action: event.action.name(),
                        at: event.at,
                    });
                }
                _ => {}
            }
        }
        Ok(())
    }
}

fn parse_humantime<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    humantime::parse_duration(raw.trim()).map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_toml_and_sorts_events() {
        let script = EventScript::parse_from_str(
            r#"
            [[carousel]]
            key = "organizers"
            items_per_view = 3
            slides = ["a", "b", "c", "d"]

            [[event]]
            at = "2s"
            action = "hide"

            [[event]]
            at = "500ms"
            carousel = "organizers"
            action = "swipe"
            start_x = 300.0
            end_x = 100.0
            "#,
            "inline",
        )
        .unwrap();

        assert_eq!(script.carousels.len(), 1);
        assert_eq!(script.carousels[0].items_per_view, Some(3));
        assert_eq!(script.events[0].at, Duration::from_millis(500));
        assert_eq!(
            script.events[0].action,
            ScriptAction::Swipe {
                start_x: 300.0,
                end_x: 100.0
            }
        );
        assert_eq!(script.events[1].action, ScriptAction::Hide);
    }

    #[test]
    fn parses_json() {
        let script = EventScript::parse_from_str(
            r#"{
                "carousel": [{ "key": "organizers", "slides": ["a", "b", "c"] }],
                "event": [
                    { "at": "1s", "carousel": "organizers", "action": "add-slide", "label": "d" }
                ]
            }"#,
            "inline",
        )
        .unwrap();

        assert_eq!(
            script.events[0].action,
            ScriptAction::AddSlide { label: "d".into() }
        );
    }

    #[test]
    fn rejects_unknown_carousel() {
        let script = EventScript {
            carousels: vec![],
            events: vec![ScriptEvent {
                at: Duration::from_secs(1),
                carousel: Some(CarouselKey::from("ghost")),
                action: ScriptAction::HoverEnter,
            }],
        };
        assert_eq!(
            script.validate(),
            Err(ScriptError::UnknownCarousel {
                key: CarouselKey::from("ghost"),
                at: Duration::from_secs(1),
            })
        );
    }

    #[test]
    fn carousel_actions_need_a_target() {
        let script = EventScript {
            carousels: vec![],
            events: vec![ScriptEvent {
                at: Duration::ZERO,
                carousel: None,
                action: ScriptAction::RemoveSlide,
            }],
        };
        assert!(matches!(
            script.validate(),
            Err(ScriptError::MissingCarousel {
                action: "remove-slide",
                ..
            })
        ));
    }

    #[test]
    fn duplicate_keys_are_rejected() {
        let spec = CarouselSpec {
            key: CarouselKey::from("organizers"),
            items_per_view: None,
            slides: vec![],
        };
        let script = EventScript {
            carousels: vec![spec.clone(), spec],
            events: vec![],
        };
        assert!(matches!(
            script.validate(),
            Err(ScriptError::DuplicateCarousel(_))
        ));
    }
}
