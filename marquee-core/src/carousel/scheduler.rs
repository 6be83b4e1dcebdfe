//! Auto-advance timer seam

use std::time::Duration;

/// Source of the repeating auto-advance tick.
///
/// `arm` starts a repeating timer and hands back a handle; `disarm` stops the
/// timer behind that handle. How the tick reaches the controller is up to the
/// host, which must deliver it on the same event loop as every other
/// carousel callback. The controller keeps at most one handle at a time.
pub trait TickScheduler {
    /// Identifies one armed timer.
    type Handle;

    /// Start a timer that ticks every `interval`.
    fn arm(&mut self, interval: Duration) -> Self::Handle;

    /// Stop the timer behind `handle`. Its ticks must no longer reach the
    /// controller.
    fn disarm(&mut self, handle: Self::Handle);
}
