pub mod catalog;
pub mod config_service;
pub mod paths;
pub mod storage;

pub use crate::catalog::JsonFileCatalog;
pub use crate::config_service::ConfigService;
pub use crate::paths::TalesPaths;
pub use crate::storage::{FileKeyValueStore, MemoryKeyValueStore};
