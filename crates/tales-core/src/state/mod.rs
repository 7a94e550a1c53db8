//! Application state held for the lifetime of a reading session.

pub mod model;

pub use model::{AppState, CatalogStatus};
