//! JSON handlers for the settings document.

use axum::Json;
use axum::extract::State;

use mihrab_app::ports::{
    LocationProvider, PrayerLogRepository, PrayerTimesProvider, QuranProvider, SettingsRepository,
};
use mihrab_domain::settings::Settings;

use crate::error::ApiError;
use crate::state::AppState;

/// `GET /api/settings`
pub async fn load<L, P, Q, SR, LR>(
    State(state): State<AppState<L, P, Q, SR, LR>>,
) -> Result<Json<Settings>, ApiError>
where
    L: LocationProvider + Send + Sync + 'static,
    P: PrayerTimesProvider + Send + Sync + 'static,
    Q: QuranProvider + Send + Sync + 'static,
    SR: SettingsRepository + Send + Sync + 'static,
    LR: PrayerLogRepository + Send + Sync + 'static,
{
    let settings = state.settings_service.load().await?;
    Ok(Json(settings))
}

/// `PUT /api/settings`
pub async fn save<L, P, Q, SR, LR>(
    State(state): State<AppState<L, P, Q, SR, LR>>,
    Json(settings): Json<Settings>,
) -> Result<Json<Settings>, ApiError>
where
    L: LocationProvider + Send + Sync + 'static,
    P: PrayerTimesProvider + Send + Sync + 'static,
    Q: QuranProvider + Send + Sync + 'static,
    SR: SettingsRepository + Send + Sync + 'static,
    LR: PrayerLogRepository + Send + Sync + 'static,
{
    let saved = state.settings_service.save(settings).await?;
    Ok(Json(saved))
}
