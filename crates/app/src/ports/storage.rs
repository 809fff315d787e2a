//! Storage ports — settings document and prayer completion log.

use std::future::Future;

use chrono::NaiveDate;

use mihrab_domain::error::MihrabError;
use mihrab_domain::prayer::PrayerName;
use mihrab_domain::settings::Settings;

/// Persistence for the single user-settings document.
pub trait SettingsRepository {
    /// Load the stored document, `None` when nothing was ever saved.
    fn load(&self) -> impl Future<Output = Result<Option<Settings>, MihrabError>> + Send;

    /// Persist the document, replacing any previous one.
    fn save(
        &self,
        settings: Settings,
    ) -> impl Future<Output = Result<Settings, MihrabError>> + Send;
}

/// Persistence for per-day prayer completion checkmarks.
pub trait PrayerLogRepository {
    /// Mark or unmark a prayer as completed on a date. Idempotent.
    fn set_completed(
        &self,
        date: NaiveDate,
        name: PrayerName,
        completed: bool,
    ) -> impl Future<Output = Result<(), MihrabError>> + Send;

    /// The prayers marked completed on a date, in no particular order.
    fn completed_on(
        &self,
        date: NaiveDate,
    ) -> impl Future<Output = Result<Vec<PrayerName>, MihrabError>> + Send;
}
