//! Quran service — chapter list and validated verse paging.

use mihrab_domain::error::MihrabError;
use mihrab_domain::quran::{self, Chapter, VersePage};

use crate::ports::QuranProvider;

/// Application service for the Quran reader.
pub struct QuranService<Q> {
    provider: Q,
}

impl<Q: QuranProvider> QuranService<Q> {
    /// Create a new service backed by the given text provider.
    pub fn new(provider: Q) -> Self {
        Self { provider }
    }

    /// All chapters in mushaf order.
    ///
    /// # Errors
    ///
    /// Returns an upstream error from the text collaborator.
    pub async fn chapters(&self) -> Result<Vec<Chapter>, MihrabError> {
        self.provider.chapters().await
    }

    /// One page of verses for a chapter.
    ///
    /// # Errors
    ///
    /// Returns [`MihrabError::Validation`] for a chapter id outside the
    /// mushaf or page 0, or an upstream error from the collaborator.
    pub async fn verse_page(&self, chapter_id: u16, page: u32) -> Result<VersePage, MihrabError> {
        quran::validate_chapter_id(chapter_id)?;
        quran::validate_page(page)?;
        self.provider.verses(chapter_id, page).await
    }
}
