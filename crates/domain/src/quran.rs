//! Quran reading values: chapters, verses, and verse pages.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Number of chapters (surahs) in the mushaf.
pub const CHAPTER_COUNT: u16 = 114;

/// Check that a chapter id is within the mushaf.
///
/// # Errors
///
/// Returns [`ValidationError::ChapterOutOfRange`] outside 1..=114.
pub fn validate_chapter_id(id: u16) -> Result<(), ValidationError> {
    if (1..=CHAPTER_COUNT).contains(&id) {
        Ok(())
    } else {
        Err(ValidationError::ChapterOutOfRange(id))
    }
}

/// A chapter (surah) descriptor from the text collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    /// Mushaf position, 1..=114.
    pub id: u16,
    /// Latin name (e.g. `"Al-Fatihah"`).
    pub name_simple: String,
    /// Arabic name.
    pub name_arabic: String,
    /// Name translated into the configured language, when provided.
    pub translated_name: Option<String>,
    /// Number of verses in the chapter.
    pub verses_count: u32,
}

/// A single verse with its Uthmani-script text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verse {
    /// `chapter:verse` key (e.g. `"1:1"`).
    pub verse_key: String,
    /// Verse text in Uthmani script.
    pub text_uthmani: String,
}

/// One page of verses within a chapter.
///
/// Pagination is 1-based and moves in reading order: `next` advances toward
/// `total_pages`, `prev` returns toward page 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersePage {
    /// Chapter the page belongs to.
    pub chapter_id: u16,
    /// Verses on this page, in reading order.
    pub verses: Vec<Verse>,
    /// Current page, 1-based.
    pub page: u32,
    /// Total pages in the chapter at the current page size.
    pub total_pages: u32,
}

impl VersePage {
    /// Whether a later page exists.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Whether an earlier page exists.
    #[must_use]
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// The next page number, when there is one.
    #[must_use]
    pub fn next_page(&self) -> Option<u32> {
        self.has_next().then(|| self.page + 1)
    }

    /// The previous page number, when there is one.
    #[must_use]
    pub fn prev_page(&self) -> Option<u32> {
        self.has_prev().then(|| self.page - 1)
    }
}

/// Check that a page number is usable (1-based).
///
/// # Errors
///
/// Returns [`ValidationError::PageOutOfRange`] for page 0.
pub fn validate_page(page: u32) -> Result<(), ValidationError> {
    if page == 0 {
        Err(ValidationError::PageOutOfRange(page))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(current: u32, total: u32) -> VersePage {
        VersePage {
            chapter_id: 2,
            verses: vec![],
            page: current,
            total_pages: total,
        }
    }

    #[test]
    fn should_accept_chapter_ids_within_mushaf() {
        assert!(validate_chapter_id(1).is_ok());
        assert!(validate_chapter_id(114).is_ok());
    }

    #[test]
    fn should_reject_chapter_ids_outside_mushaf() {
        assert_eq!(
            validate_chapter_id(0),
            Err(ValidationError::ChapterOutOfRange(0))
        );
        assert_eq!(
            validate_chapter_id(115),
            Err(ValidationError::ChapterOutOfRange(115))
        );
    }

    #[test]
    fn should_advance_next_toward_total_pages() {
        assert_eq!(page(1, 3).next_page(), Some(2));
        assert_eq!(page(3, 3).next_page(), None);
    }

    #[test]
    fn should_return_prev_toward_first_page() {
        assert_eq!(page(2, 3).prev_page(), Some(1));
        assert_eq!(page(1, 3).prev_page(), None);
    }

    #[test]
    fn should_treat_single_page_chapter_as_terminal_both_ways() {
        let only = page(1, 1);
        assert!(!only.has_next());
        assert!(!only.has_prev());
    }

    #[test]
    fn should_reject_page_zero() {
        assert_eq!(validate_page(0), Err(ValidationError::PageOutOfRange(0)));
        assert!(validate_page(1).is_ok());
    }
}
