//! JSON handlers for the Qibla compass.

use axum::Json;
use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};

use mihrab_app::ports::{
    LocationProvider, PrayerLogRepository, PrayerTimesProvider, QuranProvider, SettingsRepository,
};
use mihrab_app::services::qibla_service::QiblaService;

use crate::error::ApiError;
use crate::state::AppState;

/// Response body for `GET /api/qibla`.
#[derive(Serialize)]
pub struct QiblaResponse {
    pub latitude: f64,
    pub longitude: f64,
    pub bearing: f64,
}

/// Query parameters for `GET /api/qibla/rotation`.
#[derive(Deserialize)]
pub struct RotationQuery {
    /// Device compass heading in degrees. Absent while the sensor has not
    /// produced a reading; the rotation is then absent too.
    pub heading: Option<f64>,
}

/// Response body for `GET /api/qibla/rotation`.
#[derive(Serialize)]
pub struct RotationResponse {
    pub bearing: f64,
    pub heading: Option<f64>,
    pub rotation: Option<f64>,
}

/// `GET /api/qibla`
pub async fn readout<L, P, Q, SR, LR>(
    State(state): State<AppState<L, P, Q, SR, LR>>,
) -> Result<Json<QiblaResponse>, ApiError>
where
    L: LocationProvider + Send + Sync + 'static,
    P: PrayerTimesProvider + Send + Sync + 'static,
    Q: QuranProvider + Send + Sync + 'static,
    SR: SettingsRepository + Send + Sync + 'static,
    LR: PrayerLogRepository + Send + Sync + 'static,
{
    let readout = state.qibla_service.readout().await?;
    Ok(Json(QiblaResponse {
        latitude: readout.position.latitude(),
        longitude: readout.position.longitude(),
        bearing: readout.bearing,
    }))
}

/// `GET /api/qibla/rotation?heading=`
pub async fn rotation<L, P, Q, SR, LR>(
    State(state): State<AppState<L, P, Q, SR, LR>>,
    Query(query): Query<RotationQuery>,
) -> Result<Json<RotationResponse>, ApiError>
where
    L: LocationProvider + Send + Sync + 'static,
    P: PrayerTimesProvider + Send + Sync + 'static,
    Q: QuranProvider + Send + Sync + 'static,
    SR: SettingsRepository + Send + Sync + 'static,
    LR: PrayerLogRepository + Send + Sync + 'static,
{
    let readout = state.qibla_service.readout().await?;
    let rotation = query
        .heading
        .map(|heading| QiblaService::<L>::rotation(readout.bearing, heading));

    Ok(Json(RotationResponse {
        bearing: readout.bearing,
        heading: query.heading,
        rotation,
    }))
}
