//! File-backed key-value store.

use std::collections::BTreeMap;
use std::path::PathBuf;

use tales_core::error::Result;
use tales_core::store::KeyValueStore;

use crate::storage::atomic_json::AtomicJsonFile;

/// Persists every key in one JSON object file, mapping key to raw string.
///
/// ```json
/// { "bookmarks": "[2,5]", "theme": "\"light\"" }
/// ```
///
/// A corrupted file makes reads fail (callers fall back to their defaults)
/// and is replaced wholesale by the next successful write.
pub struct FileKeyValueStore {
    file: AtomicJsonFile<BTreeMap<String, String>>,
}

impl FileKeyValueStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            file: AtomicJsonFile::new(path),
        }
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get_raw(&self, key: &str) -> Result<Option<String>> {
        let entries = self.file.load()?.unwrap_or_default();
        Ok(entries.get(key).cloned())
    }

    fn set_raw(&self, key: &str, value: String) -> Result<()> {
        let key = key.to_string();
        self.file.update(BTreeMap::new(), move |entries| {
            entries.insert(key, value);
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tales_core::store::JsonStore;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_reads_as_absent() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(temp_dir.path().join("store.json"));
        assert_eq!(store.get_raw("theme").unwrap(), None);
    }

    #[test]
    fn test_values_survive_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("store.json");

        let store = FileKeyValueStore::new(path.clone());
        store.set_raw("theme", "\"light\"".to_string()).unwrap();
        store.set_raw("bookmarks", "[3,1]".to_string()).unwrap();

        let reopened = FileKeyValueStore::new(path);
        assert_eq!(reopened.get_raw("theme").unwrap().as_deref(), Some("\"light\""));
        assert_eq!(reopened.get_raw("bookmarks").unwrap().as_deref(), Some("[3,1]"));
    }

    #[test]
    fn test_corrupted_file_falls_back_then_recovers() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("store.json");
        std::fs::write(&path, "garbage").unwrap();

        let json = JsonStore::new(Arc::new(FileKeyValueStore::new(path)));
        assert_eq!(json.get("bookmarks", vec![7u64]), vec![7]);

        json.set("bookmarks", &vec![1u64, 2]).unwrap();
        assert_eq!(json.get("bookmarks", Vec::<u64>::new()), vec![1, 2]);
    }

    #[test]
    fn test_write_over_corrupted_file_keeps_only_new_entry() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("store.json");
        std::fs::write(&path, "{\"theme\": ").unwrap();

        let store = FileKeyValueStore::new(path.clone());
        store.set_raw("bookmarks", "[4]".to_string()).unwrap();

        assert_eq!(store.get_raw("bookmarks").unwrap().as_deref(), Some("[4]"));
        assert_eq!(store.get_raw("theme").unwrap(), None);
        assert!(!temp_dir.path().join("store.lock").exists());
    }

    #[test]
    fn test_json_round_trip_through_file() {
        let temp_dir = TempDir::new().unwrap();
        let json = JsonStore::new(Arc::new(FileKeyValueStore::new(
            temp_dir.path().join("store.json"),
        )));
        json.set("theme", "light").unwrap();
        assert_eq!(json.get("theme", "dark".to_string()), "light");
    }
}
