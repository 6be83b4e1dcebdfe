//! Track seam the controller renders into

use crate::types::TrackOffset;

/// The visible track the carousel slides.
///
/// A page implements this over its slide container: `item_count` reports how
/// many slides are currently mounted and `apply_offset` sets the single
/// transform that positions the track. The controller never touches the page
/// any other way.
#[cfg_attr(test, mockall::automock)]
pub trait RenderTarget {
    /// Number of slides currently mounted in the track.
    fn item_count(&self) -> usize;

    /// Translate the track to `offset`.
    fn apply_offset(&mut self, offset: TrackOffset);
}

impl<T: RenderTarget + ?Sized> RenderTarget for Box<T> {
    fn item_count(&self) -> usize {
        (**self).item_count()
    }

    fn apply_offset(&mut self, offset: TrackOffset) {
        (**self).apply_offset(offset)
    }
}
