//! Filtering and free-text search over the story collection.

pub mod engine;
pub mod model;

pub use engine::filter_stories;
pub use model::Filter;
