//! Touch gesture tracking

use crate::types::SwipeOutcome;

/// Remembers where a touch started and classifies it when it ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeTracker {
    threshold: f32,
    start_x: Option<f32>,
}

impl SwipeTracker {
    /// Tracker that needs more than `threshold` pixels of travel.
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            start_x: None,
        }
    }

    /// Minimum travel, exclusive.
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Whether a touch is in progress.
    pub fn is_tracking(&self) -> bool {
        self.start_x.is_some()
    }

    /// Record where a touch began. A second start replaces the first.
    pub fn start(&mut self, x: f32) {
        self.start_x = Some(x);
    }

    /// Finish the gesture at `x`.
    ///
    /// `diff = start - end`; travel strictly beyond the threshold is a swipe,
    /// anything else is a tap. An end without a start is a tap as well.
    pub fn finish(&mut self, x: f32) -> SwipeOutcome {
        let Some(start_x) = self.start_x.take() else {
            return SwipeOutcome::Tap;
        };
        let diff = start_x - x;
        if diff.abs() <= self.threshold {
            SwipeOutcome::Tap
        } else if diff > 0.0 {
            SwipeOutcome::Advance
        } else {
            SwipeOutcome::Retreat
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gesture(start: f32, end: f32) -> SwipeOutcome {
        let mut tracker = SwipeTracker::new(50.0);
        tracker.start(start);
        tracker.finish(end)
    }

    #[test]
    fn threshold_is_exclusive() {
        assert_eq!(gesture(200.0, 150.0), SwipeOutcome::Tap);
        assert_eq!(gesture(150.0, 200.0), SwipeOutcome::Tap);
        assert_eq!(gesture(200.0, 149.0), SwipeOutcome::Advance);
        assert_eq!(gesture(149.0, 200.0), SwipeOutcome::Retreat);
    }

    #[test]
    fn stationary_touch_is_a_tap() {
        assert_eq!(gesture(80.0, 80.0), SwipeOutcome::Tap);
    }

    #[test]
    fn finish_consumes_the_start() {
        let mut tracker = SwipeTracker::new(50.0);
        tracker.start(300.0);
        assert!(tracker.is_tracking());
        assert_eq!(tracker.finish(100.0), SwipeOutcome::Advance);
        assert!(!tracker.is_tracking());
        assert_eq!(tracker.finish(0.0), SwipeOutcome::Tap);
    }
}
