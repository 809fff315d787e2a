//! JSON handlers for the Hijri calendar features.

use axum::Json;
use axum::extract::{Query, State};
use chrono::Datelike;
use serde::{Deserialize, Serialize};

use mihrab_app::ports::{
    LocationProvider, PrayerLogRepository, PrayerTimesProvider, QuranProvider, SettingsRepository,
};
use mihrab_app::services::calendar_service::CalendarService;
use mihrab_domain::calendar::{Observance, RamadanDay};
use mihrab_domain::time;

use crate::error::ApiError;
use crate::state::AppState;

/// Response body for `GET /api/calendar/ramadan`.
#[derive(Serialize)]
pub struct RamadanResponse {
    pub hijri_year: u32,
    pub days: Vec<RamadanDay>,
}

/// Query parameters for `GET /api/calendar/observances`.
#[derive(Deserialize)]
pub struct ObservancesQuery {
    /// Gregorian year; defaults to the current year.
    pub year: Option<i32>,
}

/// `GET /api/calendar/ramadan`
pub async fn ramadan<L, P, Q, SR, LR>(
    State(state): State<AppState<L, P, Q, SR, LR>>,
) -> Result<Json<RamadanResponse>, ApiError>
where
    L: LocationProvider + Send + Sync + 'static,
    P: PrayerTimesProvider + Send + Sync + 'static,
    Q: QuranProvider + Send + Sync + 'static,
    SR: SettingsRepository + Send + Sync + 'static,
    LR: PrayerLogRepository + Send + Sync + 'static,
{
    let imsakiye = state.calendar_service.ramadan_imsakiye().await?;
    Ok(Json(RamadanResponse {
        hijri_year: imsakiye.hijri_year,
        days: imsakiye.days,
    }))
}

/// `GET /api/calendar/observances?year=`
pub async fn observances<L, P, Q, SR, LR>(
    State(_state): State<AppState<L, P, Q, SR, LR>>,
    Query(query): Query<ObservancesQuery>,
) -> Result<Json<Vec<Observance>>, ApiError>
where
    L: LocationProvider + Send + Sync + 'static,
    P: PrayerTimesProvider + Send + Sync + 'static,
    Q: QuranProvider + Send + Sync + 'static,
    SR: SettingsRepository + Send + Sync + 'static,
    LR: PrayerLogRepository + Send + Sync + 'static,
{
    let year = query.year.unwrap_or_else(|| time::today().year());
    let list = CalendarService::<P, L>::observances(year)?;
    Ok(Json(list))
}
