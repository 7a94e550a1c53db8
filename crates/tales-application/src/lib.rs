//! Application layer for Tales.
//!
//! Owns the application state and turns user intents into state changes and
//! presentation effects. Nothing here touches a terminal or a file directly.

pub mod bookmark_manager;
pub mod controller;
pub mod intent;
pub mod render;
pub mod theme_manager;

pub use bookmark_manager::BookmarkManager;
pub use controller::TalesApp;
pub use intent::{Effect, Intent};
pub use render::{GridView, Placeholder, ReaderView, StoryCard};
pub use theme_manager::ThemeManager;
