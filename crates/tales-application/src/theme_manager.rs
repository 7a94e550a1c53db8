//! Theme persistence.

use tales_core::Theme;
use tales_core::store::{JsonStore, THEME_KEY};

/// Loads and persists the light/dark preference.
#[derive(Debug, Clone)]
pub struct ThemeManager {
    store: JsonStore,
}

impl ThemeManager {
    pub fn new(store: JsonStore) -> Self {
        Self { store }
    }

    /// Persisted theme, falling back to dark.
    pub fn load(&self) -> Theme {
        self.store.get(THEME_KEY, Theme::Dark)
    }

    /// Flips `theme` and persists the new value. Write failures are logged only.
    pub fn toggle(&self, theme: &mut Theme) -> Theme {
        *theme = theme.toggled();
        if let Err(e) = self.store.set(THEME_KEY, &*theme) {
            tracing::warn!(theme = %theme, error = %e, "Failed to persist theme");
        }
        *theme
    }
}
