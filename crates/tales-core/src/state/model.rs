//! Application state domain models.

use crate::bookmark::BookmarkSet;
use crate::search::{Filter, filter_stories};
use crate::story::{Story, StoryId};
use crate::theme::Theme;

/// Whether the catalog has been loaded yet.
///
/// Keeps "nothing matched" apart from "nothing loaded" and "load failed".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CatalogStatus {
    #[default]
    NotLoaded,
    Loaded,
    Failed(String),
}

/// State of one reading session.
///
/// Owned by the application controller and mutated only through it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    /// Full collection in catalog order, set once at load.
    pub stories: Vec<Story>,
    pub catalog: CatalogStatus,
    pub filter: Filter,
    /// Raw search input; trimmed when applied.
    pub search: String,
    pub bookmarks: BookmarkSet,
    pub theme: Theme,
}

impl AppState {
    /// Creates state with persisted preferences and no stories yet.
    pub fn new(bookmarks: BookmarkSet, theme: Theme) -> Self {
        Self {
            bookmarks,
            theme,
            ..Self::default()
        }
    }

    /// Installs a freshly loaded catalog.
    pub fn set_stories(&mut self, stories: Vec<Story>) {
        self.stories = stories;
        self.catalog = CatalogStatus::Loaded;
    }

    /// Records a failed catalog load. The collection stays empty.
    pub fn set_catalog_failed(&mut self, message: impl Into<String>) {
        self.stories.clear();
        self.catalog = CatalogStatus::Failed(message.into());
    }

    pub fn is_loaded(&self) -> bool {
        self.catalog == CatalogStatus::Loaded
    }

    /// Stories matching the active filter and search, in catalog order.
    pub fn visible_stories(&self) -> Vec<&Story> {
        filter_stories(&self.stories, self.filter, &self.search, &self.bookmarks)
    }

    /// Bookmarked ids with no matching story in the loaded catalog.
    ///
    /// These stay in the persisted set but never show up in any view.
    pub fn stale_bookmarks(&self) -> Vec<StoryId> {
        self.bookmarks
            .ids()
            .iter()
            .copied()
            .filter(|id| !self.stories.iter().any(|s| s.id == *id))
            .collect()
    }

    pub fn story(&self, id: StoryId) -> Option<&Story> {
        self.stories.iter().find(|s| s.id == id)
    }
}
