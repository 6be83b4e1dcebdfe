//! Page event loop

use std::{collections::BTreeMap, time::Duration};

use anyhow::Context;
use marquee_core::{
    CarouselController, CarouselKey, CarouselPhase, CarouselRegistry,
    CarouselSettings, PageVisibility, SwipeOutcome, TrackOffset,
};
use serde::Serialize;
use tokio::{
    sync::mpsc::{self, UnboundedReceiver, UnboundedSender},
    time::{Instant, sleep_until},
};
use tracing::{debug, info, warn};

use crate::{
    script::{EventScript, ScriptAction, ScriptEvent},
    ticker::TokioTicker,
    track::RecordingTrack,
};

/// Messages posted to the event loop from outside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    /// An auto-advance timer fired.
    Tick { key: CarouselKey, generation: u64 },
}

/// What happened to the timer ticks a carousel received.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TickStats {
    /// Ticks that advanced the carousel.
    pub applied: u64,
    /// Ticks skipped because the page was hidden.
    pub skipped_hidden: u64,
    /// Ticks from a timer that had already been disarmed.
    pub dropped_stale: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarouselReport {
    pub key: CarouselKey,
    pub position: usize,
    pub phase: CarouselPhase,
    pub total_items: usize,
    pub items_per_view: usize,
    pub offset: TrackOffset,
    pub transform: String,
    /// Number of offsets applied to the track.
    pub renders: usize,
    pub timers_started: u64,
    pub swipes: u64,
    pub taps: u64,
    pub ticks: TickStats,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HostReport {
    pub elapsed_ms: u64,
    pub visibility: PageVisibility,
    pub page_unloaded: bool,
    pub carousels: Vec<CarouselReport>,
    /// Carousels removed by an `unload` event before the end.
    pub unloaded: Vec<CarouselKey>,
}

#[derive(Debug, Default, Clone, Copy)]
struct GestureStats {
    swipes: u64,
    taps: u64,
}

type Controller = CarouselController<RecordingTrack, TokioTicker>;

/// Stand-in deadline for durations too large to add to an `Instant`.
const FAR_FUTURE: Duration = Duration::from_secs(86_400 * 365 * 30);

/// The page: owns every carousel and the single loop that drives them.
#[derive(Debug)]
pub struct Host {
    settings: CarouselSettings,
    registry: CarouselRegistry<RecordingTrack, TokioTicker>,
    visibility: PageVisibility,
    events_tx: UnboundedSender<HostEvent>,
    events_rx: UnboundedReceiver<HostEvent>,
    ticks: BTreeMap<CarouselKey, TickStats>,
    gestures: BTreeMap<CarouselKey, GestureStats>,
    unloaded: Vec<CarouselKey>,
    page_unloaded: bool,
}

impl Host {
    /// Mount every carousel in `script`. Must be called inside a tokio
    /// runtime since armed timers are spawned right away.
    pub fn new(
        settings: CarouselSettings,
        script: &EventScript,
    ) -> anyhow::Result<Self> {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let mut host = Self {
            settings,
            registry: CarouselRegistry::new(),
            visibility: PageVisibility::Visible,
            events_tx,
            events_rx,
            ticks: BTreeMap::new(),
            gestures: BTreeMap::new(),
            unloaded: Vec::new(),
            page_unloaded: false,
        };

        for spec in &script.carousels {
            let settings = match spec.items_per_view {
                Some(items) => host
                    .settings
                    .with_items_per_view(items)
                    .with_context(|| {
                        format!("invalid items_per_view for carousel '{}'", spec.key)
                    })?,
                None => host.settings,
            };
            host.mount(spec.key.clone(), spec.slides.clone(), settings);
        }

        Ok(host)
    }

    fn mount(
        &mut self,
        key: CarouselKey,
        slides: Vec<String>,
        settings: CarouselSettings,
    ) {
        let track = RecordingTrack::new(key.clone(), slides);
        let ticker = TokioTicker::new(key.clone(), self.events_tx.clone());
        let controller = CarouselController::initialize(track, ticker, settings);
        info!(
            carousel = %key,
            slides = controller.state().total_items(),
            items_per_view = settings.items_per_view(),
            phase = ?controller.phase(),
            "carousel mounted"
        );
        self.ticks.insert(key.clone(), TickStats::default());
        self.gestures.insert(key.clone(), GestureStats::default());
        self.registry.insert(key, controller);
    }

    pub fn visibility(&self) -> PageVisibility {
        self.visibility
    }

    pub fn controller(&self, key: &CarouselKey) -> Option<&Controller> {
        self.registry.get(key)
    }

    /// Replay `events` (sorted by `at`) against real or paused tokio time for
    /// at most `duration`, then tear the page down and report.
    pub async fn run(
        mut self,
        events: Vec<ScriptEvent>,
        duration: Duration,
    ) -> HostReport {
        let start = Instant::now();
        let deadline = start.checked_add(duration).unwrap_or_else(|| {
            warn!(?duration, "replay duration out of range, clamped");
            start + FAR_FUTURE
        });
        let mut pending = events.into_iter().peekable();

        while !self.page_unloaded {
            let next_at = pending
                .peek()
                .and_then(|event| start.checked_add(event.at))
                .filter(|at| *at <= deadline);

            tokio::select! {
                biased;
                Some(event) = self.events_rx.recv() => self.handle_host_event(event),
                _ = sleep_until(next_at.unwrap_or(deadline)), if next_at.is_some() => {
                    if let Some(event) = pending.next() {
                        self.apply(event);
                    }
                }
                _ = sleep_until(deadline) => break,
            }
        }

        let elapsed = Instant::now().saturating_duration_since(start);
        self.finish(elapsed)
    }

    fn handle_host_event(&mut self, event: HostEvent) {
        match event {
            HostEvent::Tick { key, generation } => {
                let visibility = self.visibility;
                let Some(controller) = self.registry.get_mut(&key) else {
                    debug!(carousel = %key, "tick for unmounted carousel dropped");
                    return;
                };
                let stats = self.ticks.entry(key.clone()).or_default();

                if !controller.scheduler().is_live(generation) {
                    stats.dropped_stale += 1;
                    debug!(carousel = %key, generation, "stale tick dropped");
                    return;
                }
                if visibility.is_hidden() {
                    stats.skipped_hidden += 1;
                } else {
                    stats.applied += 1;
                }
                controller.on_auto_advance_tick(visibility);
            }
        }
    }

    fn apply(&mut self, event: ScriptEvent) {
        debug!(at = ?event.at, action = event.action.name(), carousel = ?event.carousel, "script event");

        match (event.action, event.carousel) {
            (ScriptAction::Hide, _) => self.set_visibility(PageVisibility::Hidden),
            (ScriptAction::Show, _) => self.set_visibility(PageVisibility::Visible),
            (ScriptAction::Unload, None) => {
                info!("page unloaded");
                self.page_unloaded = true;
            }
            (ScriptAction::Unload, Some(key)) => {
                if self.registry.remove(&key).is_some() {
                    info!(carousel = %key, "carousel unloaded");
                    self.unloaded.push(key);
                }
            }
            (action, Some(key)) => self.apply_to_carousel(&key, action),
            (action, None) => {
                warn!(action = action.name(), "event without a carousel ignored");
            }
        }
    }

    fn apply_to_carousel(&mut self, key: &CarouselKey, action: ScriptAction) {
        let Some(controller) = self.registry.get_mut(key) else {
            warn!(carousel = %key, action = action.name(), "event for unmounted carousel ignored");
            return;
        };

        match action {
            ScriptAction::HoverEnter => controller.on_hover_enter(),
            ScriptAction::HoverLeave => controller.on_hover_leave(),
            ScriptAction::Swipe { start_x, end_x } => {
                controller.on_swipe_start(start_x);
                let outcome = controller.on_swipe_end(end_x);
                let gestures = self.gestures.entry(key.clone()).or_default();
                match outcome {
                    SwipeOutcome::Tap => gestures.taps += 1,
                    SwipeOutcome::Advance | SwipeOutcome::Retreat => {
                        gestures.swipes += 1
                    }
                }
            }
            ScriptAction::AddSlide { label } => {
                controller.target_mut().push_slide(label);
                controller.refresh();
            }
            ScriptAction::RemoveSlide => {
                controller.target_mut().pop_slide();
                controller.refresh();
            }
            ScriptAction::Hide | ScriptAction::Show | ScriptAction::Unload => {}
        }
    }

    fn set_visibility(&mut self, visibility: PageVisibility) {
        if self.visibility != visibility {
            info!(?visibility, "page visibility changed");
            self.visibility = visibility;
        }
    }

    fn finish(mut self, elapsed: Duration) -> HostReport {
        let carousels = self
            .registry
            .keys()
            .into_iter()
            .filter_map(|key| {
                let controller = self.registry.get(&key)?;
                let state = controller.state();
                let gestures =
                    self.gestures.get(&key).copied().unwrap_or_default();
                Some(CarouselReport {
                    position: state.position(),
                    phase: controller.phase(),
                    total_items: state.total_items(),
                    items_per_view: state.items_per_view(),
                    offset: controller.offset(),
                    transform: controller.offset().css_transform(),
                    renders: controller.target().offsets().len(),
                    timers_started: controller.scheduler().armed_count(),
                    swipes: gestures.swipes,
                    taps: gestures.taps,
                    ticks: self.ticks.get(&key).copied().unwrap_or_default(),
                    key,
                })
            })
            .collect();

        self.registry.teardown_all();

        HostReport {
            elapsed_ms: elapsed.as_millis() as u64,
            visibility: self.visibility,
            page_unloaded: self.page_unloaded,
            carousels,
            unloaded: std::mem::take(&mut self.unloaded),
        }
    }
}

impl HostReport {
    pub fn carousel(&self, key: &str) -> Option<&CarouselReport> {
        self.carousels.iter().find(|report| report.key.as_str() == key)
    }
}
