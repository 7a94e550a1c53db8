//! Scroll-based read progress.

use serde::{Deserialize, Serialize};

/// Scroll geometry reported by the UI layer, in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScrollMetrics {
    /// Distance scrolled from the top of the content
    pub scroll_offset: f64,
    /// Total height of the scrollable content
    pub content_height: f64,
    /// Height of the visible area
    pub viewport_height: f64,
}

impl ScrollMetrics {
    pub fn new(scroll_offset: f64, content_height: f64, viewport_height: f64) -> Self {
        Self {
            scroll_offset,
            content_height,
            viewport_height,
        }
    }
}

/// Percentage of the content scrolled, in `[0, 100]`.
///
/// When nothing can be scrolled (content no taller than the viewport) or the
/// geometry is otherwise degenerate, progress is 0 rather than NaN or infinity.
pub fn compute_progress(metrics: ScrollMetrics) -> f64 {
    let scrollable = metrics.content_height - metrics.viewport_height;
    let ratio = metrics.scroll_offset / scrollable * 100.0;
    if ratio.is_finite() {
        ratio.clamp(0.0, 100.0)
    } else {
        0.0
    }
}
