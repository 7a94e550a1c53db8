//! Story domain: the immutable content records and where they come from.

pub mod catalog;
pub mod model;

pub use catalog::{CatalogSource, StaticCatalog};
pub use model::{Category, Story, StoryId};
