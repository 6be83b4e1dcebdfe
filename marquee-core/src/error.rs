//! Settings validation errors

use thiserror::Error;

/// Rejected carousel settings.
///
/// Carousel operations themselves never fail; only building the settings
/// they run with can.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettingsError {
    /// `items_per_view` was zero.
    #[error("items per view must be at least 1")]
    ZeroItemsPerView,
    /// The auto-advance interval was zero.
    #[error("auto-advance interval must be greater than zero")]
    ZeroInterval,
    /// The swipe threshold was negative, infinite or NaN.
    #[error("swipe threshold must be a finite, non-negative distance (got {0})")]
    InvalidSwipeThreshold(f32),
}
