//! The filter/search engine.

use crate::bookmark::BookmarkSet;
use crate::search::model::Filter;
use crate::story::Story;

/// Returns the stories passing both `filter` and `search`, in collection order.
///
/// The search term is trimmed; when non-empty it must appear,
/// case-insensitively, somewhere in the story's title, summary or body.
pub fn filter_stories<'a>(
    stories: &'a [Story],
    filter: Filter,
    search: &str,
    bookmarks: &BookmarkSet,
) -> Vec<&'a Story> {
    let term = search.trim().to_lowercase();

    stories
        .iter()
        .filter(|story| filter.admits(story, bookmarks))
        .filter(|story| term.is_empty() || matches_term(story, &term))
        .collect()
}

fn matches_term(story: &Story, lowered_term: &str) -> bool {
    story
        .searchable_text()
        .to_lowercase()
        .contains(lowered_term)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::story::{Category, StoryId};
    use strum::IntoEnumIterator;

    fn story(id: StoryId, category: Category, title: &str, summary: &str, body: &str) -> Story {
        Story {
            id,
            title: title.to_string(),
            category,
            summary: summary.to_string(),
            body: body.to_string(),
            length: 5,
        }
    }

    fn two_stories() -> Vec<Story> {
        vec![
            story(1, Category::Psychology, "Psyche of Glass", "A mind unravels", "Day one.\nDay two."),
            story(2, Category::Horror, "The Cellar", "Something waits below", "Steps.\nDarkness."),
        ]
    }

    fn ids(result: &[&Story]) -> Vec<StoryId> {
        result.iter().map(|s| s.id).collect()
    }

    #[test]
    fn test_category_filter_keeps_matching_category() {
        let stories = two_stories();
        let result = filter_stories(&stories, Filter::Horror, "", &BookmarkSet::new());
        assert_eq!(ids(&result), vec![2]);
    }

    #[test]
    fn test_search_matches_title_case_insensitively() {
        let stories = two_stories();
        let result = filter_stories(&stories, Filter::All, "psych", &BookmarkSet::new());
        assert_eq!(ids(&result), vec![1]);
    }

    #[test]
    fn test_bookmarked_filter() {
        let stories = two_stories();
        let bookmarks: BookmarkSet = [1].into_iter().collect();
        let result = filter_stories(&stories, Filter::Bookmarked, "", &bookmarks);
        assert_eq!(ids(&result), vec![1]);

        let result = filter_stories(&stories, Filter::Bookmarked, "glass", &bookmarks);
        assert_eq!(ids(&result), vec![1]);
    }

    #[test]
    fn test_filter_and_search_compose_with_and() {
        let stories = two_stories();
        let bookmarks: BookmarkSet = [1].into_iter().collect();
        let result = filter_stories(&stories, Filter::Bookmarked, "cellar", &bookmarks);
        assert!(result.is_empty());
    }

    #[test]
    fn test_search_is_trimmed_and_whitespace_only_matches_all() {
        let stories = two_stories();
        let result = filter_stories(&stories, Filter::All, "   ", &BookmarkSet::new());
        assert_eq!(ids(&result), vec![1, 2]);

        let result = filter_stories(&stories, Filter::All, "  DARKNESS ", &BookmarkSet::new());
        assert_eq!(ids(&result), vec![2]);
    }

    #[test]
    fn test_search_spans_field_boundaries() {
        let stories = two_stories();
        // "Cellar Something" only exists once title and summary are joined.
        let result = filter_stories(&stories, Filter::All, "cellar something", &BookmarkSet::new());
        assert_eq!(ids(&result), vec![2]);
    }

    #[test]
    fn test_non_ascii_search() {
        let stories = vec![story(9, Category::Horror, "الظل", "قصة", "نص")];
        let result = filter_stories(&stories, Filter::All, "الظل", &BookmarkSet::new());
        assert_eq!(ids(&result), vec![9]);
    }

    #[test]
    fn test_output_is_ordered_subset_for_every_filter() {
        let stories = vec![
            story(4, Category::Horror, "Night Shift", "a", "b"),
            story(1, Category::Psychology, "Night Terrors", "c", "d"),
            story(3, Category::Horror, "Noon", "e", "night"),
            story(2, Category::Psychology, "Dawn", "f", "g"),
        ];
        let bookmarks: BookmarkSet = [3, 2].into_iter().collect();

        for filter in Filter::iter() {
            for term in ["", "night", "zzz"] {
                let result = filter_stories(&stories, filter, term, &bookmarks);

                let positions: Vec<usize> = result
                    .iter()
                    .map(|r| stories.iter().position(|s| s.id == r.id).unwrap())
                    .collect();
                assert!(positions.windows(2).all(|w| w[0] < w[1]));

                for s in &result {
                    assert!(filter.admits(s, &bookmarks));
                    assert!(s.searchable_text().to_lowercase().contains(term));
                }
            }
        }
    }

    #[test]
    fn test_empty_collection_yields_empty_result() {
        let result = filter_stories(&[], Filter::All, "", &BookmarkSet::new());
        assert!(result.is_empty());
    }
}
