//! Prayer tracker service — per-day completion checkmarks and progress.

use chrono::NaiveDate;

use mihrab_domain::error::MihrabError;
use mihrab_domain::prayer::PrayerName;

use crate::ports::PrayerLogRepository;

/// Completion progress for one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyProgress {
    /// Date the progress is for.
    pub date: NaiveDate,
    /// Completed prayers, in canonical daily order.
    pub completed: Vec<PrayerName>,
    /// Total prayers in a day (always 5).
    pub total: usize,
}

impl DailyProgress {
    /// How many of the day's prayers are marked completed.
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }
}

/// Application service for the prayer completion log.
pub struct PrayerTrackerService<R> {
    log: R,
}

impl<R: PrayerLogRepository> PrayerTrackerService<R> {
    /// Create a new service backed by the given log repository.
    pub fn new(log: R) -> Self {
        Self { log }
    }

    /// Mark or unmark a prayer on a date, returning the updated progress.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn set_completed(
        &self,
        date: NaiveDate,
        name: PrayerName,
        completed: bool,
    ) -> Result<DailyProgress, MihrabError> {
        self.log.set_completed(date, name, completed).await?;
        self.progress(date).await
    }

    /// The day's progress, with completed prayers in canonical order.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn progress(&self, date: NaiveDate) -> Result<DailyProgress, MihrabError> {
        let stored = self.log.completed_on(date).await?;
        let completed: Vec<PrayerName> = PrayerName::DAILY_ORDER
            .into_iter()
            .filter(|name| stored.contains(name))
            .collect();

        Ok(DailyProgress {
            date,
            completed,
            total: PrayerName::DAILY_ORDER.len(),
        })
    }
}
