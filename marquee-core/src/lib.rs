//! Core library for Marquee.
//!
//! Marquee drives the organizer carousel on a static conference page. The
//! crate owns the carousel state machine and nothing else: the page (or any
//! other host) supplies a [`RenderTarget`] that receives track offsets and a
//! [`TickScheduler`] that arms the auto-advance timer.
//!
//! ```text
//!            hover enter                 hover leave (enough items)
//!   Advancing ───────────────▶ Idle ─────────────────────────────▶ Advancing
//!       │  tick / swipe / step                 │ swipe / step
//!       └──────── position moves, phase unchanged ────────┘
//! ```
//!
//! Several carousels can live side by side in a [`CarouselRegistry`].

pub mod carousel;
pub mod error;
pub mod settings;
pub mod types;

pub use carousel::{
    CarouselController, CarouselRegistry, CarouselState, RenderTarget,
    SwipeTracker, TickScheduler,
};
pub use error::SettingsError;
pub use settings::CarouselSettings;
pub use types::{
    CarouselKey, CarouselPhase, Direction, PageVisibility, SwipeOutcome,
    TrackOffset,
};
