//! # Marquee Host
//!
//! Headless stand-in for the conference page. The host owns the one event
//! loop every carousel callback runs on: script events (hover, swipe, page
//! visibility, slides mounted or unmounted) and auto-advance ticks are all
//! handled in arrival order by a single task, so controllers never need
//! locking.
//!
//! Timers are tokio tasks that only post [`HostEvent::Tick`] messages back to
//! the loop. They never touch carousel state themselves.

pub mod host;
pub mod script;
pub mod ticker;
pub mod track;

pub use host::{CarouselReport, Host, HostEvent, HostReport, TickStats};
pub use script::{CarouselSpec, EventScript, ScriptAction, ScriptError, ScriptEvent};
pub use ticker::{TickerHandle, TokioTicker};
pub use track::RecordingTrack;
