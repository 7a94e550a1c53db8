//! Story domain models.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Identifier of a story, unique within a catalog.
pub type StoryId = u64;

/// Category a story belongs to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Category {
    Psychology,
    Horror,
}

/// An immutable content record sourced from the catalog.
///
/// The JSON shape matches the catalog file exactly:
///
/// ```json
/// { "id": 1, "title": "...", "category": "horror",
///   "summary": "...", "body": "line one\nline two", "length": 7 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    pub id: StoryId,
    pub title: String,
    pub category: Category,
    pub summary: String,
    /// Newline-delimited paragraphs.
    pub body: String,
    /// Estimated reading time in minutes.
    pub length: u32,
}

impl Story {
    /// Text the search engine matches against: title, summary and body joined by spaces.
    pub fn searchable_text(&self) -> String {
        format!("{} {} {}", self.title, self.summary, self.body)
    }

    /// Splits the body into paragraphs on newline boundaries, in order.
    ///
    /// Blank lines produce empty paragraphs, and a trailing `\r` is dropped
    /// so CRLF catalogs render the same as LF ones.
    pub fn paragraphs(&self) -> Vec<String> {
        self.body
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
            .collect()
    }
}
