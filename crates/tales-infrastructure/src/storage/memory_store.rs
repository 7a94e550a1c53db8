//! In-process key-value store.

use std::collections::HashMap;
use std::sync::Mutex;

use tales_core::error::{Result, TalesError};
use tales_core::store::KeyValueStore;

/// Keeps values in memory only; nothing survives the process.
///
/// Backs `--ephemeral` runs and tests.
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a raw value, bypassing JSON encoding.
    pub fn with_raw(self, key: &str, value: &str) -> Self {
        if let Ok(mut values) = self.values.lock() {
            values.insert(key.to_string(), value.to_string());
        }
        self
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get_raw(&self, key: &str) -> Result<Option<String>> {
        let values = self
            .values
            .lock()
            .map_err(|e| TalesError::internal(format!("Store lock poisoned: {}", e)))?;
        Ok(values.get(key).cloned())
    }

    fn set_raw(&self, key: &str, value: String) -> Result<()> {
        let mut values = self
            .values
            .lock()
            .map_err(|e| TalesError::internal(format!("Store lock poisoned: {}", e)))?;
        values.insert(key.to_string(), value);
        Ok(())
    }
}
