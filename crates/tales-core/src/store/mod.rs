//! Persistent key-value store abstraction.
//!
//! The raw [`KeyValueStore`] holds strings; [`JsonStore`] layers JSON
//! encoding and the fallback-on-failure read contract on top of it.

pub mod json;
pub mod repository;

pub use json::JsonStore;
pub use repository::KeyValueStore;

/// Key holding the JSON array of bookmarked story ids.
pub const BOOKMARKS_KEY: &str = "bookmarks";

/// Key holding the JSON string `"light"` or `"dark"`.
pub const THEME_KEY: &str = "theme";
