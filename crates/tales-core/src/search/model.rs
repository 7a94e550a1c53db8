//! Search domain models.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::bookmark::BookmarkSet;
use crate::story::{Category, Story};

/// Category/bookmark restriction applied before the text search.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Filter {
    /// No restriction
    #[default]
    All,
    Psychology,
    Horror,
    /// Only stories in the bookmark set
    Bookmarked,
}

impl Filter {
    /// Whether `story` passes this filter's predicate.
    pub fn admits(self, story: &Story, bookmarks: &BookmarkSet) -> bool {
        match self {
            Self::All => true,
            Self::Psychology => story.category == Category::Psychology,
            Self::Horror => story.category == Category::Horror,
            Self::Bookmarked => bookmarks.contains(story.id),
        }
    }
}
