//! Fixed configuration for one carousel instance.

use std::time::Duration;

use crate::error::SettingsError;

/// Cards shown side by side on the organizers strip.
pub const DEFAULT_ITEMS_PER_VIEW: usize = 2;
/// Delay between automatic advances.
pub const DEFAULT_AUTO_ADVANCE: Duration = Duration::from_secs(7);
/// Horizontal travel a touch has to exceed before it counts as a swipe.
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 50.0;

/// Validated settings a [`CarouselController`](crate::CarouselController)
/// runs with. Construct through [`CarouselSettings::new`] or
/// [`Default`]; the fields are read-only afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CarouselSettings {
    items_per_view: usize,
    #[cfg_attr(feature = "serde", serde(with = "duration_millis"))]
    auto_advance: Duration,
    swipe_threshold: f32,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            items_per_view: DEFAULT_ITEMS_PER_VIEW,
            auto_advance: DEFAULT_AUTO_ADVANCE,
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
        }
    }
}

impl CarouselSettings {
    /// Validate and build settings.
    ///
    /// Fails when `items_per_view` or `auto_advance` is zero, or when
    /// `swipe_threshold` is not a finite, non-negative distance.
    pub fn new(
        items_per_view: usize,
        auto_advance: Duration,
        swipe_threshold: f32,
    ) -> Result<Self, SettingsError> {
        if items_per_view == 0 {
            return Err(SettingsError::ZeroItemsPerView);
        }
        if auto_advance.is_zero() {
            return Err(SettingsError::ZeroInterval);
        }
        if !swipe_threshold.is_finite() || swipe_threshold < 0.0 {
            return Err(SettingsError::InvalidSwipeThreshold(swipe_threshold));
        }

        Ok(Self {
            items_per_view,
            auto_advance,
            swipe_threshold,
        })
    }

    /// Same settings with a different number of visible items.
    pub fn with_items_per_view(
        self,
        items_per_view: usize,
    ) -> Result<Self, SettingsError> {
        Self::new(items_per_view, self.auto_advance, self.swipe_threshold)
    }

    /// Same settings with a different auto-advance interval.
    pub fn with_auto_advance(
        self,
        auto_advance: Duration,
    ) -> Result<Self, SettingsError> {
        Self::new(self.items_per_view, auto_advance, self.swipe_threshold)
    }

    /// Items visible side by side.
    pub fn items_per_view(&self) -> usize {
        self.items_per_view
    }

    /// Interval between automatic steps.
    pub fn auto_advance(&self) -> Duration {
        self.auto_advance
    }

    /// Horizontal distance, in pixels, a swipe must exceed.
    pub fn swipe_threshold(&self) -> f32 {
        self.swipe_threshold
    }
}

#[cfg(feature = "serde")]
mod duration_millis {
    use serde::Serializer;
    use std::time::Duration;

    pub fn serialize<S: Serializer>(
        value: &Duration,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_millis() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_organizer_strip() {
        let settings = CarouselSettings::default();
        assert_eq!(settings.items_per_view(), 2);
        assert_eq!(settings.auto_advance(), Duration::from_secs(7));
        assert_eq!(settings.swipe_threshold(), 50.0);
    }

    #[test]
    fn rejects_degenerate_values() {
        assert_eq!(
            CarouselSettings::new(0, Duration::from_secs(1), 50.0),
            Err(SettingsError::ZeroItemsPerView)
        );
        assert_eq!(
            CarouselSettings::new(3, Duration::ZERO, 50.0),
            Err(SettingsError::ZeroInterval)
        );
        assert!(matches!(
            CarouselSettings::new(3, Duration::from_secs(1), f32::NAN),
            Err(SettingsError::InvalidSwipeThreshold(_))
        ));
        assert_eq!(
            CarouselSettings::new(3, Duration::from_secs(1), -1.0),
            Err(SettingsError::InvalidSwipeThreshold(-1.0))
        );
    }

    #[test]
    fn builders_revalidate() {
        let settings = CarouselSettings::default();
        assert_eq!(
            settings.with_items_per_view(0),
            Err(SettingsError::ZeroItemsPerView)
        );
        let faster = settings
            .with_auto_advance(Duration::from_millis(1500))
            .expect("valid interval");
        assert_eq!(faster.auto_advance(), Duration::from_millis(1500));
        assert_eq!(faster.items_per_view(), 2);
    }
}
