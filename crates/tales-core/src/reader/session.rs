//! Reader session state machine.

use crate::reader::progress::{ScrollMetrics, compute_progress};
use crate::story::{Story, StoryId};

/// A story currently shown in the reader.
#[derive(Debug, Clone, PartialEq)]
pub struct OpenStory {
    pub story: Story,
    /// Body split into display blocks, in original order.
    pub paragraphs: Vec<String>,
    pub scroll: ScrollMetrics,
    /// Last computed progress, in `[0, 100]`.
    pub progress: f64,
}

/// Reader session with two states: closed, or open on one story.
///
/// The font size belongs to the reading surface rather than to a single
/// story, so it survives closing and reopening.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReaderSession {
    open: Option<OpenStory>,
    font_size: Option<f32>,
}

impl ReaderSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the story with `id` from `stories`.
    ///
    /// Returns `false` and leaves the session untouched when no such story exists.
    pub fn open(&mut self, stories: &[Story], id: StoryId) -> bool {
        let Some(story) = stories.iter().find(|s| s.id == id) else {
            tracing::debug!(story_id = id, "Reader open ignored: story not in collection");
            return false;
        };

        // Layout of the new body is unknown until the UI reports a scroll event.
        let scroll = ScrollMetrics::default();

        self.open = Some(OpenStory {
            paragraphs: story.paragraphs(),
            story: story.clone(),
            scroll,
            progress: compute_progress(scroll),
        });
        true
    }

    /// Returns to the closed state.
    pub fn close(&mut self) {
        self.open = None;
    }

    /// Recomputes progress from a scroll event. Ignored while closed.
    ///
    /// Returns the new progress when the session is open.
    pub fn scroll(&mut self, metrics: ScrollMetrics) -> Option<f64> {
        let open = self.open.as_mut()?;
        open.scroll = metrics;
        open.progress = compute_progress(metrics);
        Some(open.progress)
    }

    /// Applies a display font size. Only takes effect while open.
    ///
    /// Bounds are the caller's concern; the value is applied as given.
    pub fn set_font_size(&mut self, px: f32) -> bool {
        if self.open.is_none() {
            return false;
        }
        self.font_size = Some(px);
        true
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn current(&self) -> Option<&OpenStory> {
        self.open.as_ref()
    }

    /// Id of the story currently open, if any.
    pub fn current_id(&self) -> Option<StoryId> {
        self.open.as_ref().map(|open| open.story.id)
    }

    pub fn font_size(&self) -> Option<f32> {
        self.font_size
    }
}
