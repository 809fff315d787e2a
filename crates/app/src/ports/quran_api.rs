//! Quran text port — the remote text collaborator.

use std::future::Future;

use mihrab_domain::error::MihrabError;
use mihrab_domain::quran::{Chapter, VersePage};

/// Remote Quranic text service.
pub trait QuranProvider {
    /// All 114 chapters in mushaf order.
    fn chapters(&self) -> impl Future<Output = Result<Vec<Chapter>, MihrabError>> + Send;

    /// One page of verses for a chapter. `page` is 1-based; callers
    /// validate chapter id and page before reaching the adapter.
    fn verses(
        &self,
        chapter_id: u16,
        page: u32,
    ) -> impl Future<Output = Result<VersePage, MihrabError>> + Send;
}

impl<T: QuranProvider + Send + Sync> QuranProvider for std::sync::Arc<T> {
    fn chapters(&self) -> impl Future<Output = Result<Vec<Chapter>, MihrabError>> + Send {
        (**self).chapters()
    }

    fn verses(
        &self,
        chapter_id: u16,
        page: u32,
    ) -> impl Future<Output = Result<VersePage, MihrabError>> + Send {
        (**self).verses(chapter_id, page)
    }
}
