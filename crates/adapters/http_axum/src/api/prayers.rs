//! JSON handlers for the daily schedule, next-prayer countdown, and the
//! completion tracker.

use axum::Json;
use axum::extract::{Query, State};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use mihrab_app::ports::{
    LocationProvider, PrayerLogRepository, PrayerTimesProvider, QuranProvider, SettingsRepository,
};
use mihrab_app::services::tracker_service::DailyProgress;
use mihrab_domain::calendar::HijriDate;
use mihrab_domain::geo::Place;
use mihrab_domain::prayer::{NextPrayer, PrayerName};
use mihrab_domain::time;

use crate::error::ApiError;
use crate::state::AppState;

/// Query parameters for `GET /api/prayers/schedule`.
#[derive(Deserialize)]
pub struct ScheduleQuery {
    /// Day offset from today; defaults to 0.
    #[serde(default)]
    pub offset: i64,
}

/// One schedule row.
#[derive(Serialize)]
pub struct EntryBody {
    pub name: PrayerName,
    pub time: String,
}

/// Response body for `GET /api/prayers/schedule`.
#[derive(Serialize)]
pub struct ScheduleResponse {
    pub date: NaiveDate,
    pub hijri: Option<HijriDate>,
    pub place: Option<Place>,
    pub entries: Vec<EntryBody>,
}

/// Response body for `GET /api/prayers/next`.
#[derive(Serialize)]
pub struct NextPrayerResponse {
    /// `None` once all of today's prayers have passed.
    pub next: Option<NextPrayer>,
}

/// Query parameters for `GET /api/prayers/log`.
#[derive(Deserialize)]
pub struct ProgressQuery {
    /// Date to report; defaults to today.
    pub date: Option<NaiveDate>,
}

/// Request body for `PUT /api/prayers/log`.
#[derive(Deserialize)]
pub struct SetCompletedRequest {
    /// Date to record against; defaults to today.
    pub date: Option<NaiveDate>,
    pub name: PrayerName,
    pub completed: bool,
}

/// Response body for the tracker endpoints.
#[derive(Serialize)]
pub struct ProgressResponse {
    pub date: NaiveDate,
    pub completed: Vec<PrayerName>,
    pub completed_count: usize,
    pub total: usize,
}

impl From<DailyProgress> for ProgressResponse {
    fn from(progress: DailyProgress) -> Self {
        Self {
            date: progress.date,
            completed_count: progress.completed_count(),
            total: progress.total,
            completed: progress.completed,
        }
    }
}

/// `GET /api/prayers/schedule?offset=`
pub async fn schedule<L, P, Q, SR, LR>(
    State(state): State<AppState<L, P, Q, SR, LR>>,
    Query(query): Query<ScheduleQuery>,
) -> Result<Json<ScheduleResponse>, ApiError>
where
    L: LocationProvider + Send + Sync + 'static,
    P: PrayerTimesProvider + Send + Sync + 'static,
    Q: QuranProvider + Send + Sync + 'static,
    SR: SettingsRepository + Send + Sync + 'static,
    LR: PrayerLogRepository + Send + Sync + 'static,
{
    let schedule = state.schedule_service.schedule(query.offset).await?;
    let entries = schedule
        .entries
        .iter()
        .map(|entry| EntryBody {
            name: entry.name,
            time: entry.time_string(),
        })
        .collect();

    Ok(Json(ScheduleResponse {
        date: schedule.date,
        hijri: schedule.hijri,
        place: schedule.place,
        entries,
    }))
}

/// `GET /api/prayers/next`
pub async fn next<L, P, Q, SR, LR>(
    State(state): State<AppState<L, P, Q, SR, LR>>,
) -> Result<Json<NextPrayerResponse>, ApiError>
where
    L: LocationProvider + Send + Sync + 'static,
    P: PrayerTimesProvider + Send + Sync + 'static,
    Q: QuranProvider + Send + Sync + 'static,
    SR: SettingsRepository + Send + Sync + 'static,
    LR: PrayerLogRepository + Send + Sync + 'static,
{
    let next = state.schedule_service.next_prayer().await?;
    Ok(Json(NextPrayerResponse { next }))
}

/// `GET /api/prayers/log?date=`
pub async fn progress<L, P, Q, SR, LR>(
    State(state): State<AppState<L, P, Q, SR, LR>>,
    Query(query): Query<ProgressQuery>,
) -> Result<Json<ProgressResponse>, ApiError>
where
    L: LocationProvider + Send + Sync + 'static,
    P: PrayerTimesProvider + Send + Sync + 'static,
    Q: QuranProvider + Send + Sync + 'static,
    SR: SettingsRepository + Send + Sync + 'static,
    LR: PrayerLogRepository + Send + Sync + 'static,
{
    let date = query.date.unwrap_or_else(time::today);
    let progress = state.tracker_service.progress(date).await?;
    Ok(Json(progress.into()))
}

/// `PUT /api/prayers/log`
pub async fn set_completed<L, P, Q, SR, LR>(
    State(state): State<AppState<L, P, Q, SR, LR>>,
    Json(req): Json<SetCompletedRequest>,
) -> Result<Json<ProgressResponse>, ApiError>
where
    L: LocationProvider + Send + Sync + 'static,
    P: PrayerTimesProvider + Send + Sync + 'static,
    Q: QuranProvider + Send + Sync + 'static,
    SR: SettingsRepository + Send + Sync + 'static,
    LR: PrayerLogRepository + Send + Sync + 'static,
{
    let date = req.date.unwrap_or_else(time::today);
    let progress = state
        .tracker_service
        .set_completed(date, req.name, req.completed)
        .await?;
    Ok(Json(progress.into()))
}
