//! Registry for managing multiple carousel controllers keyed by CarouselKey

use std::collections::HashMap;

use tracing::debug;

use super::{
    controller::CarouselController, scheduler::TickScheduler,
    target::RenderTarget,
};
use crate::types::{CarouselKey, CarouselPhase, PageVisibility};

/// Independent carousels hosted on the same page.
///
/// Each entry owns its own timer and position, so two strips never share
/// state. Removing or replacing an entry tears its timer down.
#[derive(Debug)]
pub struct CarouselRegistry<T, S>
where
    T: RenderTarget,
    S: TickScheduler,
{
    controllers: HashMap<CarouselKey, CarouselController<T, S>>,
}

impl<T, S> Default for CarouselRegistry<T, S>
where
    T: RenderTarget,
    S: TickScheduler,
{
    fn default() -> Self {
        Self {
            controllers: HashMap::new(),
        }
    }
}

impl<T, S> CarouselRegistry<T, S>
where
    T: RenderTarget,
    S: TickScheduler,
{
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a controller. A controller already stored under the same key
    /// is torn down and returned.
    pub fn insert(
        &mut self,
        key: CarouselKey,
        controller: CarouselController<T, S>,
    ) -> Option<CarouselController<T, S>> {
        let mut previous = self.controllers.insert(key.clone(), controller);
        if let Some(old) = previous.as_mut() {
            debug!(carousel = %key, "replacing carousel");
            old.teardown();
        }
        previous
    }

    /// Controller stored under `key`.
    pub fn get(&self, key: &CarouselKey) -> Option<&CarouselController<T, S>> {
        self.controllers.get(key)
    }

    /// Mutable controller stored under `key`.
    pub fn get_mut(
        &mut self,
        key: &CarouselKey,
    ) -> Option<&mut CarouselController<T, S>> {
        self.controllers.get_mut(key)
    }

    /// Unregister and tear down the controller under `key`.
    pub fn remove(
        &mut self,
        key: &CarouselKey,
    ) -> Option<CarouselController<T, S>> {
        let mut removed = self.controllers.remove(key)?;
        removed.teardown();
        Some(removed)
    }

    /// Whether a controller is stored under `key`.
    pub fn contains(&self, key: &CarouselKey) -> bool {
        self.controllers.contains_key(key)
    }

    /// Keys in sorted order.
    pub fn keys(&self) -> Vec<CarouselKey> {
        let mut keys: Vec<_> = self.controllers.keys().cloned().collect();
        keys.sort();
        keys
    }

    /// Controllers in arbitrary order.
    pub fn iter(
        &self,
    ) -> impl Iterator<Item = (&CarouselKey, &CarouselController<T, S>)> {
        self.controllers.iter()
    }

    /// Number of registered carousels.
    pub fn len(&self) -> usize {
        self.controllers.len()
    }

    /// Whether no carousel is registered.
    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
    }

    /// Deliver one tick to every advancing carousel, e.g. from a page-wide
    /// timer. Paused carousels are skipped.
    pub fn broadcast_tick(&mut self, visibility: PageVisibility) {
        for controller in self.controllers.values_mut() {
            if controller.phase() == CarouselPhase::Advancing {
                controller.on_auto_advance_tick(visibility);
            }
        }
    }

    /// Page unload: stop every timer and drop every controller.
    pub fn teardown_all(&mut self) {
        for (key, mut controller) in self.controllers.drain() {
            debug!(carousel = %key, "tearing down carousel");
            controller.teardown();
        }
    }
}
