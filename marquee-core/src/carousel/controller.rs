//! CarouselController: position, timer and gestures for one carousel

use std::fmt;

use tracing::{debug, trace};

use super::{
    scheduler::TickScheduler, state::CarouselState, swipe::SwipeTracker,
    target::RenderTarget,
};
use crate::{
    settings::CarouselSettings,
    types::{CarouselPhase, Direction, PageVisibility, SwipeOutcome, TrackOffset},
};

/// Owns one carousel: the window position, the auto-advance timer handle,
/// the in-flight touch gesture, and the track it renders into.
///
/// The controller is either [`CarouselPhase::Advancing`] (timer armed) or
/// [`CarouselPhase::Idle`]. Hovering the carousel disarms the timer and
/// leaving it re-arms the timer when there is something to scroll. Steps from
/// ticks or swipes move the window without touching the phase.
///
/// Dropping the controller disarms its timer.
pub struct CarouselController<T, S>
where
    T: RenderTarget,
    S: TickScheduler,
{
    state: CarouselState,
    settings: CarouselSettings,
    target: T,
    scheduler: S,
    timer: Option<S::Handle>,
    swipe: SwipeTracker,
    hovered: bool,
    last_offset: TrackOffset,
}

impl<T, S> CarouselController<T, S>
where
    T: RenderTarget,
    S: TickScheduler,
{
    /// Build a controller over `target`, render the first position, and arm
    /// the auto-advance timer when there are more items than fit in the view.
    pub fn initialize(target: T, scheduler: S, settings: CarouselSettings) -> Self {
        let total_items = target.item_count();
        let mut controller = Self {
            state: CarouselState::new(total_items, settings.items_per_view()),
            settings,
            target,
            scheduler,
            timer: None,
            swipe: SwipeTracker::new(settings.swipe_threshold()),
            hovered: false,
            last_offset: TrackOffset::default(),
        };

        controller.render();
        if controller.state.can_move() {
            controller.arm();
        }

        debug!(
            total_items,
            items_per_view = settings.items_per_view(),
            phase = ?controller.phase(),
            "carousel initialized"
        );
        controller
    }

    /// Index of the leftmost visible item.
    pub fn position(&self) -> usize {
        self.state.position()
    }

    /// Position and item counts.
    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    /// Settings this carousel was initialized with.
    pub fn settings(&self) -> &CarouselSettings {
        &self.settings
    }

    /// [`CarouselPhase::Advancing`] while a timer is armed.
    pub fn phase(&self) -> CarouselPhase {
        if self.timer.is_some() {
            CarouselPhase::Advancing
        } else {
            CarouselPhase::Idle
        }
    }

    /// Offset applied by the most recent render.
    pub fn offset(&self) -> TrackOffset {
        self.last_offset
    }

    /// The track being rendered into.
    pub fn target(&self) -> &T {
        &self.target
    }

    /// Mutable access to the track, e.g. to mount or unmount slides. Call
    /// [`refresh`](Self::refresh) afterwards to reconcile.
    pub fn target_mut(&mut self) -> &mut T {
        &mut self.target
    }

    /// The tick source timers are armed on.
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Move the window one item, wrapping at either end, and re-render.
    /// Picks up the track's current item count first and does nothing when
    /// every item already fits in the view.
    pub fn step(&mut self, direction: Direction) {
        let resized = self.sync_item_count();
        let from = self.state.position();
        if !self.state.step(direction) {
            trace!(?direction, "step ignored, nothing to scroll");
            if resized {
                self.render();
            }
            return;
        }
        trace!(?direction, from, to = self.state.position(), "carousel step");
        self.render();
    }

    /// Re-read the item count, clamp the position into range, and apply the
    /// offset to the track.
    pub fn render(&mut self) {
        self.sync_item_count();
        if let Some(previous) = self.state.clamp() {
            debug!(
                previous,
                clamped = self.state.position(),
                total_items = self.state.total_items(),
                "carousel position out of range, clamped"
            );
        }

        let offset = TrackOffset::for_position(
            self.state.position(),
            self.state.items_per_view(),
        );
        self.target.apply_offset(offset);
        self.last_offset = offset;
    }

    /// Pointer entered the carousel: pause auto-advance.
    pub fn on_hover_enter(&mut self) {
        self.hovered = true;
        if self.disarm() {
            debug!(position = self.state.position(), "carousel paused on hover");
        }
    }

    /// Pointer left the carousel: resume auto-advance if there is anything to
    /// scroll and no timer is running yet.
    pub fn on_hover_leave(&mut self) {
        self.hovered = false;
        if self.timer.is_none() && self.state.can_move() {
            self.arm();
            debug!(position = self.state.position(), "carousel resumed");
        }
    }

    /// Timer callback. Advances unless the page is hidden.
    pub fn on_auto_advance_tick(&mut self, visibility: PageVisibility) {
        if visibility.is_hidden() {
            self.sync_item_count();
            trace!("page hidden, auto-advance skipped");
            return;
        }
        self.step(Direction::Forward);
    }

    /// Touch started at horizontal coordinate `x`.
    pub fn on_swipe_start(&mut self, x: f32) {
        self.swipe.start(x);
    }

    /// Finish a touch gesture and step if it travelled past the threshold.
    pub fn on_swipe_end(&mut self, x: f32) -> SwipeOutcome {
        let outcome = self.swipe.finish(x);
        trace!(?outcome, "swipe finished");
        if let Some(direction) = outcome.direction() {
            self.step(direction);
        }
        outcome
    }

    /// Pick up slides that were mounted or unmounted since the last render.
    ///
    /// Re-renders, which disarms the timer if the carousel can no longer
    /// move, then arms it if it can move again and the pointer is not
    /// hovering.
    pub fn refresh(&mut self) {
        self.render();
        if self.state.can_move() && !self.hovered && self.timer.is_none() {
            self.arm();
            debug!(
                total_items = self.state.total_items(),
                "items added, auto-advance started"
            );
        }
    }

    /// Stop the timer for good. Safe to call more than once.
    pub fn teardown(&mut self) {
        if self.disarm() {
            debug!("carousel torn down");
        }
    }

    /// Adopt the target's current item count. Disarms the timer once there
    /// is nothing left to scroll. Returns `true` when the count changed.
    fn sync_item_count(&mut self) -> bool {
        let count = self.target.item_count();
        if count == self.state.total_items() {
            return false;
        }
        trace!(from = self.state.total_items(), to = count, "item count changed");
        self.state.set_total_items(count);
        if !self.state.can_move() && self.disarm() {
            debug!(
                total_items = count,
                "not enough items left, auto-advance stopped"
            );
        }
        true
    }

    fn arm(&mut self) {
        if self.timer.is_some() {
            return;
        }
        let handle = self.scheduler.arm(self.settings.auto_advance());
        self.timer = Some(handle);
    }

    fn disarm(&mut self) -> bool {
        match self.timer.take() {
            Some(handle) => {
                self.scheduler.disarm(handle);
                true
            }
            None => false,
        }
    }
}

impl<T, S> Drop for CarouselController<T, S>
where
    T: RenderTarget,
    S: TickScheduler,
{
    fn drop(&mut self) {
        self.disarm();
    }
}

impl<T, S> fmt::Debug for CarouselController<T, S>
where
    T: RenderTarget,
    S: TickScheduler,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CarouselController")
            .field("state", &self.state)
            .field("phase", &self.phase())
            .field("hovered", &self.hovered)
            .field("offset", &self.last_offset)
            .finish_non_exhaustive()
    }
}
