//! CarouselState: index-based window over the slide list

use crate::types::Direction;

/// Position of the visible window.
///
/// `position` is the index of the left-most visible item and stays within
/// `0..=max_index()`. When there are no more items than fit in the view the
/// state cannot move and `position` is pinned to 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CarouselState {
    pub(crate) position: usize,
    pub(crate) items_per_view: usize,
    pub(crate) total_items: usize,
}

impl CarouselState {
    /// State at position 0. `items_per_view` is raised to at least 1.
    pub fn new(total_items: usize, items_per_view: usize) -> Self {
        Self {
            position: 0,
            items_per_view: items_per_view.max(1),
            total_items,
        }
    }

    /// Index of the left-most visible item.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Items that fit in the view.
    pub fn items_per_view(&self) -> usize {
        self.items_per_view
    }

    /// Slide count as of the last sync with the track.
    pub fn total_items(&self) -> usize {
        self.total_items
    }

    /// Largest valid `position`.
    #[inline]
    pub fn max_index(&self) -> usize {
        self.total_items.saturating_sub(self.items_per_view)
    }

    /// Whether there are more items than fit in the view.
    #[inline]
    pub fn can_move(&self) -> bool {
        self.total_items > self.items_per_view
    }

    /// Move one item with wraparound. Returns `false` when the state cannot
    /// move.
    pub(crate) fn step(&mut self, direction: Direction) -> bool {
        if !self.can_move() {
            return false;
        }
        let max_index = self.max_index();
        self.position = match direction {
            Direction::Forward if self.position + 1 > max_index => 0,
            Direction::Forward => self.position + 1,
            Direction::Backward if self.position == 0 => max_index,
            Direction::Backward => (self.position - 1).min(max_index),
        };
        true
    }

    /// Pull `position` back into range. Returns the previous value when a
    /// correction was needed.
    pub(crate) fn clamp(&mut self) -> Option<usize> {
        let max_index = self.max_index();
        if self.position > max_index {
            let previous = self.position;
            self.position = max_index;
            Some(previous)
        } else {
            None
        }
    }

    pub(crate) fn set_total_items(&mut self, total_items: usize) {
        self.total_items = total_items;
    }
}
