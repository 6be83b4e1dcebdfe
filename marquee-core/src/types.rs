//! Shared types for the carousel module

use std::fmt;

/// Unique key for a carousel hosted on a page.
/// Using a dedicated key type keeps registry lookups from drifting into
/// ad-hoc string matching at every call site.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CarouselKey(String);

impl CarouselKey {
    /// Wrap a page-unique identifier.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The key as written on the page.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CarouselKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for CarouselKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for CarouselKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which way a step moves the visible window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Direction {
    /// `+1`: next item, wraps to the first position after the last.
    Forward,
    /// `-1`: previous item, wraps to the last position before the first.
    Backward,
}

impl Direction {
    /// Map a signed delta to a direction. Zero has no direction.
    pub fn from_sign(delta: i32) -> Option<Self> {
        match delta.signum() {
            1 => Some(Self::Forward),
            -1 => Some(Self::Backward),
            _ => None,
        }
    }

    /// `1` for [`Forward`](Self::Forward), `-1` for
    /// [`Backward`](Self::Backward).
    pub fn sign(self) -> i32 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }
}

/// Whether the auto-advance timer is armed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CarouselPhase {
    /// Timer disarmed: pointer hovering, or not enough items to move.
    #[default]
    Idle,
    /// Timer armed and ticking.
    Advancing,
}

/// Page visibility as reported by the host when a tick fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PageVisibility {
    /// Foreground tab.
    #[default]
    Visible,
    /// Backgrounded tab or minimized window. Ticks are skipped so no
    /// animation backlog builds up.
    Hidden,
}

impl PageVisibility {
    /// Whether auto-advance ticks should be skipped.
    pub fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }
}

/// Classification of a finished touch gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SwipeOutcome {
    /// Finger moved left past the threshold.
    Advance,
    /// Finger moved right past the threshold.
    Retreat,
    /// Too short to be a swipe.
    Tap,
}

impl SwipeOutcome {
    /// Step direction for a swipe; `None` for a tap.
    pub fn direction(self) -> Option<Direction> {
        match self {
            Self::Advance => Some(Direction::Forward),
            Self::Retreat => Some(Direction::Backward),
            Self::Tap => None,
        }
    }
}

/// Horizontal translation of the carousel track, in percent of the track
/// width. Always zero or negative.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TrackOffset(f32);

impl TrackOffset {
    /// Offset that puts `position` at the left edge when `items_per_view`
    /// items share the viewport.
    pub fn for_position(position: usize, items_per_view: usize) -> Self {
        let per_view = items_per_view.max(1) as f32;
        let percent = -(position as f32 * 100.0 / per_view);
        // Avoid handing out `-0.0` for the first position.
        Self(if percent == 0.0 { 0.0 } else { percent })
    }

    /// Raw percentage, e.g. `-50.0`.
    pub fn percent(self) -> f32 {
        self.0
    }

    /// CSS transform value for the track element.
    pub fn css_transform(self) -> String {
        format!("translateX({}%)", self.0)
    }
}

impl fmt::Display for TrackOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_is_position_over_items_per_view() {
        assert_eq!(TrackOffset::for_position(0, 2).percent(), 0.0);
        assert_eq!(TrackOffset::for_position(1, 2).percent(), -50.0);
        assert_eq!(TrackOffset::for_position(3, 2).percent(), -150.0);
        assert_eq!(TrackOffset::for_position(1, 4).percent(), -25.0);
    }

    #[test]
    fn offset_renders_as_css() {
        assert_eq!(
            TrackOffset::for_position(2, 2).css_transform(),
            "translateX(-100%)"
        );
        assert_eq!(
            TrackOffset::for_position(0, 3).css_transform(),
            "translateX(0%)"
        );
    }

    #[test]
    fn direction_from_sign() {
        assert_eq!(Direction::from_sign(1), Some(Direction::Forward));
        assert_eq!(Direction::from_sign(-7), Some(Direction::Backward));
        assert_eq!(Direction::from_sign(0), None);
        assert_eq!(Direction::Backward.sign(), -1);
    }

    #[test]
    fn swipe_outcome_maps_to_direction() {
        assert_eq!(SwipeOutcome::Advance.direction(), Some(Direction::Forward));
        assert_eq!(
            SwipeOutcome::Retreat.direction(),
            Some(Direction::Backward)
        );
        assert_eq!(SwipeOutcome::Tap.direction(), None);
    }
}
