//! Focused single-story reading session.

pub mod progress;
pub mod session;

pub use progress::{ScrollMetrics, compute_progress};
pub use session::{OpenStory, ReaderSession};
