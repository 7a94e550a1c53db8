//! The application controller: single owner of state, single consumer of intents.

use std::sync::Arc;

use tales_core::reader::ReaderSession;
use tales_core::store::JsonStore;
use tales_core::story::CatalogSource;
use tales_core::{AppState, Locale, StoryId};

use crate::bookmark_manager::BookmarkManager;
use crate::intent::{Effect, Intent};
use crate::render::{GridView, ReaderView, render_grid, render_reader};
use crate::theme_manager::ThemeManager;

/// Owns the application state and applies intents one at a time.
///
/// Each call to [`TalesApp::dispatch`] runs to completion before the next
/// intent is accepted (it takes `&mut self`), so toggles never interleave.
pub struct TalesApp {
    state: AppState,
    reader: ReaderSession,
    bookmarks: BookmarkManager,
    themes: ThemeManager,
    catalog: Arc<dyn CatalogSource>,
    locale: Locale,
}

impl TalesApp {
    /// Creates the controller with persisted bookmarks and theme. The catalog
    /// is not read until [`Intent::LoadCatalog`] is dispatched.
    pub fn new(store: JsonStore, catalog: Arc<dyn CatalogSource>, locale: Locale) -> Self {
        let bookmarks = BookmarkManager::new(store.clone());
        let themes = ThemeManager::new(store);
        let state = AppState::new(bookmarks.load(), themes.load());

        Self {
            state,
            reader: ReaderSession::new(),
            bookmarks,
            themes,
            catalog,
            locale,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn reader(&self) -> &ReaderSession {
        &self.reader
    }

    /// Current grid, built from scratch.
    pub fn grid(&self) -> GridView {
        render_grid(&self.state, self.locale)
    }

    /// Current reader view, if the reader is open.
    pub fn reader_view(&self) -> Option<ReaderView> {
        render_reader(&self.reader, &self.state.bookmarks, self.locale)
    }

    /// Applies one intent and returns what the UI must present.
    pub async fn dispatch(&mut self, intent: Intent) -> Vec<Effect> {
        tracing::debug!(?intent, "Dispatching intent");

        match intent {
            Intent::LoadCatalog => self.load_catalog().await,
            Intent::SetSearch(search) => {
                self.state.search = search;
                vec![self.render_effect()]
            }
            Intent::SetFilter(filter) => {
                self.state.filter = filter;
                vec![self.render_effect()]
            }
            Intent::ToggleBookmark(id) => self.toggle_bookmark(id),
            Intent::OpenReader(id) => {
                if self.reader.open(&self.state.stories, id) {
                    self.reader_effect().into_iter().collect()
                } else {
                    Vec::new()
                }
            }
            Intent::CloseReader => {
                if self.reader.is_open() {
                    self.reader.close();
                    vec![Effect::ReaderClosed]
                } else {
                    Vec::new()
                }
            }
            Intent::Scroll(metrics) => {
                if self.reader.scroll(metrics).is_some() {
                    self.reader_effect().into_iter().collect()
                } else {
                    Vec::new()
                }
            }
            Intent::SetFontSize(px) => {
                if self.reader.set_font_size(px) {
                    self.reader_effect().into_iter().collect()
                } else {
                    Vec::new()
                }
            }
            Intent::ToggleReaderBookmark => match self.reader.current_id() {
                Some(id) => self.toggle_bookmark(id),
                None => Vec::new(),
            },
            Intent::ToggleTheme => {
                let theme = self.themes.toggle(&mut self.state.theme);
                vec![Effect::ApplyTheme(theme)]
            }
        }
    }

    /// Startup sequence: apply the persisted theme, read the catalog, render.
    async fn load_catalog(&mut self) -> Vec<Effect> {
        match self.catalog.load().await {
            Ok(stories) => {
                tracing::info!(count = stories.len(), "Catalog loaded");
                self.state.set_stories(stories);

                let stale = self.state.stale_bookmarks();
                if !stale.is_empty() {
                    tracing::warn!(
                        ?stale,
                        "Bookmarks reference stories missing from the catalog; keeping them"
                    );
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load catalog");
                self.state.set_catalog_failed(e.to_string());
            }
        }

        vec![Effect::ApplyTheme(self.state.theme), self.render_effect()]
    }

    /// Only ids in the loaded catalog can be toggled; anything else is a no-op.
    fn toggle_bookmark(&mut self, id: StoryId) -> Vec<Effect> {
        if self.state.story(id).is_none() {
            tracing::debug!(story_id = id, "Ignoring bookmark toggle for unknown story");
            return Vec::new();
        }
        self.bookmarks.toggle(&mut self.state.bookmarks, id);

        let mut effects = vec![self.render_effect()];
        if self.reader.current_id() == Some(id) {
            effects.extend(self.reader_effect());
        }
        effects
    }

    fn render_effect(&self) -> Effect {
        Effect::Render(self.grid())
    }

    fn reader_effect(&self) -> Option<Effect> {
        self.reader_view().map(Effect::Reader)
    }
}
