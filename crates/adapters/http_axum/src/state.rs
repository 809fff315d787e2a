//! Shared application state for axum handlers.

use std::sync::Arc;

use mihrab_app::ports::{
    LocationProvider, PrayerLogRepository, PrayerTimesProvider, QuranProvider, SettingsRepository,
};
use mihrab_app::services::calendar_service::CalendarService;
use mihrab_app::services::prayer_schedule_service::PrayerScheduleService;
use mihrab_app::services::qibla_service::QiblaService;
use mihrab_app::services::quran_service::QuranService;
use mihrab_app::services::settings_service::SettingsService;
use mihrab_app::services::tracker_service::PrayerTrackerService;

/// Application state shared across all axum handlers.
///
/// Generic over the port implementations to avoid dynamic dispatch.
/// `Clone` is implemented manually so the underlying types themselves do not
/// need to be `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<L, P, Q, SR, LR> {
    /// Qibla bearing service.
    pub qibla_service: Arc<QiblaService<L>>,
    /// Daily schedule and next-prayer service.
    pub schedule_service: Arc<PrayerScheduleService<P, L>>,
    /// Quran reader service.
    pub quran_service: Arc<QuranService<Q>>,
    /// Ramadan imsakiye and observances service.
    pub calendar_service: Arc<CalendarService<P, L>>,
    /// Settings document service.
    pub settings_service: Arc<SettingsService<SR>>,
    /// Prayer completion tracker service.
    pub tracker_service: Arc<PrayerTrackerService<LR>>,
}

impl<L, P, Q, SR, LR> Clone for AppState<L, P, Q, SR, LR> {
    fn clone(&self) -> Self {
        Self {
            qibla_service: Arc::clone(&self.qibla_service),
            schedule_service: Arc::clone(&self.schedule_service),
            quran_service: Arc::clone(&self.quran_service),
            calendar_service: Arc::clone(&self.calendar_service),
            settings_service: Arc::clone(&self.settings_service),
            tracker_service: Arc::clone(&self.tracker_service),
        }
    }
}

impl<L, P, Q, SR, LR> AppState<L, P, Q, SR, LR>
where
    L: LocationProvider + Send + Sync + 'static,
    P: PrayerTimesProvider + Send + Sync + 'static,
    Q: QuranProvider + Send + Sync + 'static,
    SR: SettingsRepository + Send + Sync + 'static,
    LR: PrayerLogRepository + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        qibla_service: QiblaService<L>,
        schedule_service: PrayerScheduleService<P, L>,
        quran_service: QuranService<Q>,
        calendar_service: CalendarService<P, L>,
        settings_service: SettingsService<SR>,
        tracker_service: PrayerTrackerService<LR>,
    ) -> Self {
        Self {
            qibla_service: Arc::new(qibla_service),
            schedule_service: Arc::new(schedule_service),
            quran_service: Arc::new(quran_service),
            calendar_service: Arc::new(calendar_service),
            settings_service: Arc::new(settings_service),
            tracker_service: Arc::new(tracker_service),
        }
    }
}
