//! Carousel
//!
//! The carousel is split the same way on every page that hosts one: a plain
//! position model ([`CarouselState`]), the touch gesture tracker
//! ([`SwipeTracker`]), the controller that ties them to the timer and the
//! track ([`CarouselController`]), and a keyed [`CarouselRegistry`] for pages
//! with more than one strip.

pub mod controller;
pub mod registry;
pub mod scheduler;
pub mod state;
pub mod swipe;
pub mod target;

pub use controller::CarouselController;
pub use registry::CarouselRegistry;
pub use scheduler::TickScheduler;
pub use state::CarouselState;
pub use swipe::SwipeTracker;
pub use target::RenderTarget;
