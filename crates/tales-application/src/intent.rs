//! Intents in, effects out.

use serde::Serialize;
use tales_core::reader::ScrollMetrics;
use tales_core::{Filter, StoryId, Theme};

use crate::render::{GridView, ReaderView};

/// A discrete user action.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    /// Fetch the catalog; issued once at startup.
    LoadCatalog,
    /// Search input changed.
    SetSearch(String),
    /// A filter tab was selected.
    SetFilter(Filter),
    /// Save/saved toggle on a card.
    ToggleBookmark(StoryId),
    /// Read action on a card.
    OpenReader(StoryId),
    CloseReader,
    /// Reader content scrolled.
    Scroll(ScrollMetrics),
    /// Font-size control moved, already bounded by the UI.
    SetFontSize(f32),
    /// Bookmark button inside the reader.
    ToggleReaderBookmark,
    ToggleTheme,
}

/// Something the UI layer must present after an intent.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum Effect {
    /// Replace the whole grid.
    Render(GridView),
    ApplyTheme(Theme),
    /// Show or refresh the reader.
    Reader(ReaderView),
    ReaderClosed,
}
