//! `SQLite` implementation of [`PrayerLogRepository`].
//!
//! One row per (day, prayer) pair. Marking is an idempotent insert and
//! unmarking is a delete, so repeated toggles from the client are harmless.

use std::future::Future;
use std::str::FromStr;

use chrono::NaiveDate;
use sqlx::SqlitePool;

use mihrab_app::ports::PrayerLogRepository;
use mihrab_domain::error::MihrabError;
use mihrab_domain::id::LogEntryId;
use mihrab_domain::prayer::PrayerName;

use crate::error::StorageError;

const INSERT: &str =
    "INSERT INTO prayer_log (id, day, prayer) VALUES (?, ?, ?) ON CONFLICT (day, prayer) DO NOTHING";
const DELETE: &str = "DELETE FROM prayer_log WHERE day = ? AND prayer = ?";
const SELECT_BY_DAY: &str = "SELECT prayer FROM prayer_log WHERE day = ?";

/// `SQLite`-backed prayer completion log.
pub struct SqlitePrayerLogRepository {
    pool: SqlitePool,
}

impl SqlitePrayerLogRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl PrayerLogRepository for SqlitePrayerLogRepository {
    fn set_completed(
        &self,
        date: NaiveDate,
        name: PrayerName,
        completed: bool,
    ) -> impl Future<Output = Result<(), MihrabError>> + Send {
        let pool = self.pool.clone();
        async move {
            if completed {
                sqlx::query(INSERT)
                    .bind(LogEntryId::new().to_string())
                    .bind(date.to_string())
                    .bind(name.as_str())
                    .execute(&pool)
                    .await
                    .map_err(StorageError::from)?;
            } else {
                sqlx::query(DELETE)
                    .bind(date.to_string())
                    .bind(name.as_str())
                    .execute(&pool)
                    .await
                    .map_err(StorageError::from)?;
            }

            Ok(())
        }
    }

    fn completed_on(
        &self,
        date: NaiveDate,
    ) -> impl Future<Output = Result<Vec<PrayerName>, MihrabError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<(String,)> = sqlx::query_as(SELECT_BY_DAY)
                .bind(date.to_string())
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            rows.into_iter()
                .map(|(raw,)| {
                    PrayerName::from_str(&raw).map_err(|err| {
                        StorageError::from(sqlx::Error::Decode(Box::new(err))).into()
                    })
                })
                .collect()
        }
    }
}
