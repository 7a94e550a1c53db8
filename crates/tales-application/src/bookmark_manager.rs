//! Bookmark persistence.

use tales_core::store::{BOOKMARKS_KEY, JsonStore};
use tales_core::{BookmarkSet, StoryId};

/// Loads and persists the bookmark set.
#[derive(Debug, Clone)]
pub struct BookmarkManager {
    store: JsonStore,
}

impl BookmarkManager {
    pub fn new(store: JsonStore) -> Self {
        Self { store }
    }

    /// Persisted bookmarks, or an empty set if none were stored or they are unreadable.
    pub fn load(&self) -> BookmarkSet {
        self.store.get(BOOKMARKS_KEY, BookmarkSet::new())
    }

    /// Toggles `id` in `bookmarks` and writes the whole set back.
    ///
    /// Every call writes, even when toggling back to a previous state. A
    /// failed write is logged and the in-memory change is kept.
    /// Returns `true` when `id` is bookmarked afterwards.
    pub fn toggle(&self, bookmarks: &mut BookmarkSet, id: StoryId) -> bool {
        let saved = bookmarks.toggle(id);
        if let Err(e) = self.store.set(BOOKMARKS_KEY, &*bookmarks) {
            tracing::warn!(story_id = id, error = %e, "Failed to persist bookmarks");
        }
        tracing::debug!(story_id = id, saved, total = bookmarks.len(), "Bookmark toggled");
        saved
    }
}
