//! Ordered bookmark set.

use serde::{Deserialize, Serialize};

use crate::story::StoryId;

/// The set of bookmarked story ids, in the order they were saved.
///
/// Serializes as a plain JSON array of integers. Duplicates in persisted
/// data collapse to their first occurrence on load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<StoryId>", into = "Vec<StoryId>")]
pub struct BookmarkSet {
    ids: Vec<StoryId>,
}

impl BookmarkSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: StoryId) -> bool {
        self.ids.contains(&id)
    }

    /// Removes `id` if present, otherwise appends it.
    ///
    /// Returns `true` when `id` is bookmarked after the call.
    pub fn toggle(&mut self, id: StoryId) -> bool {
        match self.ids.iter().position(|&existing| existing == id) {
            Some(index) => {
                self.ids.remove(index);
                false
            }
            None => {
                self.ids.push(id);
                true
            }
        }
    }

    pub fn ids(&self) -> &[StoryId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl From<Vec<StoryId>> for BookmarkSet {
    fn from(raw: Vec<StoryId>) -> Self {
        let mut ids = Vec::with_capacity(raw.len());
        for id in raw {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        Self { ids }
    }
}

impl From<BookmarkSet> for Vec<StoryId> {
    fn from(set: BookmarkSet) -> Self {
        set.ids
    }
}

impl FromIterator<StoryId> for BookmarkSet {
    fn from_iter<I: IntoIterator<Item = StoryId>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}
