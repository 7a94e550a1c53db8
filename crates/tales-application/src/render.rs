//! Grid and reader view models.
//!
//! Every render is a full replacement built from the current state; no
//! output depends on a previous render.

use serde::Serialize;
use tales_core::reader::ReaderSession;
use tales_core::{AppState, BookmarkSet, CatalogStatus, Locale, Story, StoryId};

/// One story card in the grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoryCard {
    /// Target of both the read and the save actions
    pub id: StoryId,
    pub title: String,
    pub category_label: String,
    pub length_label: String,
    pub summary: String,
    pub read_label: String,
    pub saved: bool,
    pub save_label: String,
}

/// Informational card shown instead of an empty grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Placeholder {
    pub title: String,
    pub hint: String,
}

/// Contents of the story grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GridView {
    /// Catalog not loaded yet
    Loading { message: String },
    /// Catalog load failed
    Failed { title: String, message: String },
    /// Loaded, but nothing matched the filter and search
    Empty(Placeholder),
    Cards { cards: Vec<StoryCard> },
}

impl GridView {
    /// Ids of the cards shown, in display order. Empty for non-card views.
    pub fn story_ids(&self) -> Vec<StoryId> {
        match self {
            Self::Cards { cards } => cards.iter().map(|c| c.id).collect(),
            _ => Vec::new(),
        }
    }
}

/// The open reader.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReaderView {
    pub id: StoryId,
    pub title: String,
    pub category_label: String,
    pub paragraphs: Vec<String>,
    /// Percentage in `[0, 100]`
    pub progress: f64,
    pub font_size: Option<f32>,
    pub saved: bool,
    pub save_label: String,
}

/// Builds the grid for the current state.
pub fn render_grid(state: &AppState, locale: Locale) -> GridView {
    match &state.catalog {
        CatalogStatus::NotLoaded => GridView::Loading {
            message: locale.loading_label().to_string(),
        },
        CatalogStatus::Failed(message) => GridView::Failed {
            title: locale.failed_label().to_string(),
            message: message.clone(),
        },
        CatalogStatus::Loaded => {
            let visible = state.visible_stories();
            if visible.is_empty() {
                return GridView::Empty(Placeholder {
                    title: locale.empty_title().to_string(),
                    hint: locale.empty_hint().to_string(),
                });
            }
            let cards = visible
                .into_iter()
                .map(|story| story_card(story, &state.bookmarks, locale))
                .collect();
            GridView::Cards { cards }
        }
    }
}

fn story_card(story: &Story, bookmarks: &BookmarkSet, locale: Locale) -> StoryCard {
    let saved = bookmarks.contains(story.id);
    StoryCard {
        id: story.id,
        title: story.title.clone(),
        category_label: locale.category_label(story.category).to_string(),
        length_label: locale.length_label(story.length),
        summary: story.summary.clone(),
        read_label: locale.read_label().to_string(),
        saved,
        save_label: locale.save_label(saved).to_string(),
    }
}

/// Builds the reader view, or `None` while the reader is closed.
pub fn render_reader(
    reader: &ReaderSession,
    bookmarks: &BookmarkSet,
    locale: Locale,
) -> Option<ReaderView> {
    let open = reader.current()?;
    let saved = bookmarks.contains(open.story.id);
    Some(ReaderView {
        id: open.story.id,
        title: open.story.title.clone(),
        category_label: locale.category_label(open.story.category).to_string(),
        paragraphs: open.paragraphs.clone(),
        progress: open.progress,
        font_size: reader.font_size(),
        saved,
        save_label: locale.save_label(saved).to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tales_core::{Category, Filter, Theme};

    fn loaded_state() -> AppState {
        let mut state = AppState::new([2].into_iter().collect(), Theme::Dark);
        state.set_stories(vec![
            Story {
                id: 1,
                title: "Glass".to_string(),
                category: Category::Psychology,
                summary: "A mind unravels".to_string(),
                body: "one".to_string(),
                length: 6,
            },
            Story {
                id: 2,
                title: "Cellar".to_string(),
                category: Category::Horror,
                summary: "Something waits".to_string(),
                body: "two".to_string(),
                length: 4,
            },
        ]);
        state
    }

    #[test]
    fn test_unloaded_renders_loading() {
        let state = AppState::default();
        assert!(matches!(render_grid(&state, Locale::En), GridView::Loading { .. }));
    }

    #[test]
    fn test_failed_renders_failure_with_message() {
        let mut state = AppState::default();
        state.set_catalog_failed("Failed to read stories.json");
        match render_grid(&state, Locale::En) {
            GridView::Failed { title, message } => {
                assert_eq!(title, "Failed to load stories.");
                assert_eq!(message, "Failed to read stories.json");
            }
            other => panic!("unexpected view: {:?}", other),
        }
    }

    #[test]
    fn test_cards_carry_labels_and_bookmark_state() {
        let state = loaded_state();
        let GridView::Cards { cards } = render_grid(&state, Locale::En) else {
            panic!("expected cards");
        };
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].category_label, "Psychology");
        assert_eq!(cards[0].length_label, "6 min read");
        assert_eq!(cards[0].read_label, "Read");
        assert!(!cards[0].saved);
        assert_eq!(cards[0].save_label, "Save");
        assert!(cards[1].saved);
        assert_eq!(cards[1].save_label, "Saved");
    }

    #[test]
    fn test_arabic_labels() {
        let state = loaded_state();
        let GridView::Cards { cards } = render_grid(&state, Locale::Ar) else {
            panic!("expected cards");
        };
        assert_eq!(cards[1].category_label, "رعب");
        assert_eq!(cards[1].length_label, "4 دقيقة قراءة");
        assert_eq!(cards[1].save_label, "مُحفَظة");
    }

    #[test]
    fn test_no_match_renders_single_placeholder() {
        let mut state = loaded_state();
        state.search = "zzz".to_string();
        let view = render_grid(&state, Locale::En);
        assert_eq!(
            view,
            GridView::Empty(Placeholder {
                title: "No matching stories.".to_string(),
                hint: "Try another category or a different search term.".to_string(),
            })
        );
        assert!(view.story_ids().is_empty());
    }

    #[test]
    fn test_render_is_independent_of_previous_render() {
        let mut state = loaded_state();
        let first = render_grid(&state, Locale::En);
        state.filter = Filter::Horror;
        let _ = render_grid(&state, Locale::En);
        state.filter = Filter::All;
        assert_eq!(render_grid(&state, Locale::En), first);
    }

    #[test]
    fn test_reader_view_closed_is_none() {
        let reader = ReaderSession::new();
        assert!(render_reader(&reader, &BookmarkSet::new(), Locale::En).is_none());
    }

    #[test]
    fn test_grid_serializes_with_kind_tag() {
        let view = GridView::Loading {
            message: "Loading stories…".to_string(),
        };
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["kind"], "loading");
    }
}
