//! Raw key-value store trait.

use crate::error::Result;

/// A persistent string store keyed by name.
///
/// Implementations are synchronous. Each key is written independently, so no
/// transaction discipline is required across keys.
pub trait KeyValueStore: Send + Sync {
    /// Returns the raw string stored at `key`, or `None` if it was never written.
    fn get_raw(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` at `key`, replacing any previous value.
    fn set_raw(&self, key: &str, value: String) -> Result<()>;
}
