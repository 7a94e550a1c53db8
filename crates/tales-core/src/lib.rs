//! Domain layer for the Tales reader.
//!
//! Holds the story model, the pure filter/search engine, the bookmark set,
//! the reader session state machine and the persistence traits the other
//! layers implement.

pub mod bookmark;
pub mod config;
pub mod error;
pub mod locale;
pub mod reader;
pub mod search;
pub mod state;
pub mod store;
pub mod story;
pub mod theme;

// Re-export common error type
pub use error::TalesError;

pub use bookmark::BookmarkSet;
pub use config::RootConfig;
pub use locale::Locale;
pub use search::Filter;
pub use state::{AppState, CatalogStatus};
pub use story::{Category, Story, StoryId};
pub use theme::Theme;
