//! Auto-advance timers backed by tokio tasks

use std::time::Duration;

use marquee_core::{CarouselKey, TickScheduler};
use tokio::{
    sync::mpsc::UnboundedSender,
    task::JoinHandle,
    time::{MissedTickBehavior, interval},
};
use tracing::trace;

use crate::host::HostEvent;

/// Running timer task. Dropping the handle does not stop the task; pass it
/// back to [`TokioTicker::disarm`].
#[derive(Debug)]
pub struct TickerHandle {
    generation: u64,
    task: JoinHandle<()>,
}

impl TickerHandle {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// One carousel's timer source.
///
/// Every arm starts a new generation; ticks carry the generation they were
/// produced by, so the event loop can drop ticks that were already queued
/// when their timer was disarmed.
#[derive(Debug)]
pub struct TokioTicker {
    key: CarouselKey,
    events: UnboundedSender<HostEvent>,
    generation: u64,
    live: Option<u64>,
}

impl TokioTicker {
    pub fn new(key: CarouselKey, events: UnboundedSender<HostEvent>) -> Self {
        Self {
            key,
            events,
            generation: 0,
            live: None,
        }
    }

    /// Whether `generation` belongs to the timer that is currently armed.
    pub fn is_live(&self, generation: u64) -> bool {
        self.live == Some(generation)
    }

    /// Number of timers started so far.
    pub fn armed_count(&self) -> u64 {
        self.generation
    }
}

impl TickScheduler for TokioTicker {
    type Handle = TickerHandle;

    fn arm(&mut self, period: Duration) -> TickerHandle {
        self.generation += 1;
        let generation = self.generation;
        self.live = Some(generation);

        let key = self.key.clone();
        let events = self.events.clone();
        let task = tokio::spawn(async move {
            let mut ticks = interval(period);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick completes immediately.
            ticks.tick().await;
            loop {
                ticks.tick().await;
                trace!(carousel = %key, generation, "auto-advance tick");
                let event = HostEvent::Tick {
                    key: key.clone(),
                    generation,
                };
                if events.send(event).is_err() {
                    break;
                }
            }
        });

        TickerHandle { generation, task }
    }

    fn disarm(&mut self, handle: TickerHandle) {
        if self.live == Some(handle.generation) {
            self.live = None;
        }
        handle.task.abort();
    }
}
