//! User-facing labels.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

use crate::story::Category;

/// Language used for card and reader labels. Arabic is the catalog's native language.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Locale {
    #[default]
    Ar,
    En,
}

impl Locale {
    pub fn category_label(self, category: Category) -> &'static str {
        match (self, category) {
            (Self::Ar, Category::Psychology) => "علم النفس",
            (Self::Ar, Category::Horror) => "رعب",
            (Self::En, Category::Psychology) => "Psychology",
            (Self::En, Category::Horror) => "Horror",
        }
    }

    /// Reading-length badge, e.g. "7 min read".
    pub fn length_label(self, minutes: u32) -> String {
        match self {
            Self::Ar => format!("{minutes} دقيقة قراءة"),
            Self::En => format!("{minutes} min read"),
        }
    }

    pub fn read_label(self) -> &'static str {
        match self {
            Self::Ar => "قراءة",
            Self::En => "Read",
        }
    }

    /// Label of the save toggle for the current bookmark membership.
    pub fn save_label(self, saved: bool) -> &'static str {
        match (self, saved) {
            (Self::Ar, true) => "مُحفَظة",
            (Self::Ar, false) => "حفظ",
            (Self::En, true) => "Saved",
            (Self::En, false) => "Save",
        }
    }

    pub fn empty_title(self) -> &'static str {
        match self {
            Self::Ar => "لا توجد قصص مطابقة.",
            Self::En => "No matching stories.",
        }
    }

    pub fn empty_hint(self) -> &'static str {
        match self {
            Self::Ar => "جرّب تصنيفاً آخر أو ابحث بكلمة مختلفة.",
            Self::En => "Try another category or a different search term.",
        }
    }

    pub fn loading_label(self) -> &'static str {
        match self {
            Self::Ar => "جارٍ تحميل القصص…",
            Self::En => "Loading stories…",
        }
    }

    pub fn failed_label(self) -> &'static str {
        match self {
            Self::Ar => "تعذّر تحميل القصص.",
            Self::En => "Failed to load stories.",
        }
    }
}
