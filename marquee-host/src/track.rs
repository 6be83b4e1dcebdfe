use marquee_core::{CarouselKey, RenderTarget, TrackOffset};
use tracing::trace;

/// In-memory slide track. Keeps the mounted slide labels and every offset
/// the controller applied.
#[derive(Debug, Clone)]
pub struct RecordingTrack {
    key: CarouselKey,
    slides: Vec<String>,
    offsets: Vec<TrackOffset>,
}

impl RecordingTrack {
    pub fn new(key: CarouselKey, slides: Vec<String>) -> Self {
        Self {
            key,
            slides,
            offsets: Vec::new(),
        }
    }

    pub fn slides(&self) -> &[String] {
        &self.slides
    }

    pub fn offsets(&self) -> &[TrackOffset] {
        &self.offsets
    }

    pub fn push_slide(&mut self, label: impl Into<String>) {
        self.slides.push(label.into());
    }

    pub fn pop_slide(&mut self) -> Option<String> {
        self.slides.pop()
    }
}

impl RenderTarget for RecordingTrack {
    fn item_count(&self) -> usize {
        self.slides.len()
    }

    fn apply_offset(&mut self, offset: TrackOffset) {
        trace!(carousel = %self.key, transform = %offset.css_transform(), "track moved");
        self.offsets.push(offset);
    }
}
