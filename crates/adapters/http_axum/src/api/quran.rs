//! JSON handlers for the Quran reader.

use axum::Json;
use axum::extract::{Path, Query, State};
use serde::{Deserialize, Serialize};

use mihrab_app::ports::{
    LocationProvider, PrayerLogRepository, PrayerTimesProvider, QuranProvider, SettingsRepository,
};
use mihrab_domain::quran::{Chapter, Verse, VersePage};

use crate::error::ApiError;
use crate::state::AppState;

/// Query parameters for the verses endpoint.
#[derive(Deserialize)]
pub struct VersesQuery {
    /// 1-based page; defaults to the first page.
    pub page: Option<u32>,
}

/// Response body for `GET /api/quran/chapters/{id}/verses`.
#[derive(Serialize)]
pub struct VersePageResponse {
    pub chapter_id: u16,
    pub verses: Vec<Verse>,
    pub page: u32,
    pub total_pages: u32,
    pub next_page: Option<u32>,
    pub prev_page: Option<u32>,
}

impl From<VersePage> for VersePageResponse {
    fn from(page: VersePage) -> Self {
        Self {
            chapter_id: page.chapter_id,
            page: page.page,
            total_pages: page.total_pages,
            next_page: page.next_page(),
            prev_page: page.prev_page(),
            verses: page.verses,
        }
    }
}

/// `GET /api/quran/chapters`
pub async fn chapters<L, P, Q, SR, LR>(
    State(state): State<AppState<L, P, Q, SR, LR>>,
) -> Result<Json<Vec<Chapter>>, ApiError>
where
    L: LocationProvider + Send + Sync + 'static,
    P: PrayerTimesProvider + Send + Sync + 'static,
    Q: QuranProvider + Send + Sync + 'static,
    SR: SettingsRepository + Send + Sync + 'static,
    LR: PrayerLogRepository + Send + Sync + 'static,
{
    let chapters = state.quran_service.chapters().await?;
    Ok(Json(chapters))
}

/// `GET /api/quran/chapters/{id}/verses?page=`
pub async fn verses<L, P, Q, SR, LR>(
    State(state): State<AppState<L, P, Q, SR, LR>>,
    Path(id): Path<u16>,
    Query(query): Query<VersesQuery>,
) -> Result<Json<VersePageResponse>, ApiError>
where
    L: LocationProvider + Send + Sync + 'static,
    P: PrayerTimesProvider + Send + Sync + 'static,
    Q: QuranProvider + Send + Sync + 'static,
    SR: SettingsRepository + Send + Sync + 'static,
    LR: PrayerLogRepository + Send + Sync + 'static,
{
    let page = state
        .quran_service
        .verse_page(id, query.page.unwrap_or(1))
        .await?;
    Ok(Json(page.into()))
}
