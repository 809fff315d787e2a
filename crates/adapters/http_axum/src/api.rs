//! JSON REST API route assembly.

pub mod calendar;
pub mod prayers;
pub mod qibla;
pub mod quran;
pub mod settings;
pub mod tajweed;

use axum::Router;
use axum::routing::get;

use mihrab_app::ports::{
    LocationProvider, PrayerLogRepository, PrayerTimesProvider, QuranProvider, SettingsRepository,
};

use crate::state::AppState;

/// All `/api` routes.
pub fn routes<L, P, Q, SR, LR>() -> Router<AppState<L, P, Q, SR, LR>>
where
    L: LocationProvider + Send + Sync + 'static,
    P: PrayerTimesProvider + Send + Sync + 'static,
    Q: QuranProvider + Send + Sync + 'static,
    SR: SettingsRepository + Send + Sync + 'static,
    LR: PrayerLogRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/qibla", get(qibla::readout))
        .route("/qibla/rotation", get(qibla::rotation))
        .route("/prayers/schedule", get(prayers::schedule))
        .route("/prayers/next", get(prayers::next))
        .route(
            "/prayers/log",
            get(prayers::progress).put(prayers::set_completed),
        )
        .route("/quran/chapters", get(quran::chapters))
        .route("/quran/chapters/{id}/verses", get(quran::verses))
        .route("/calendar/ramadan", get(calendar::ramadan))
        .route("/calendar/observances", get(calendar::observances))
        .route("/tajweed", get(tajweed::reference))
        .route("/settings", get(settings::load).put(settings::save))
}
