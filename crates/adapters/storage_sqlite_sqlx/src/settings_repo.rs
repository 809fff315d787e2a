//! `SQLite` implementation of [`SettingsRepository`].
//!
//! Settings are stored as a single JSON document in a one-row table, so new
//! preference fields never need a migration.

use std::future::Future;

use sqlx::SqlitePool;

use mihrab_app::ports::SettingsRepository;
use mihrab_domain::error::MihrabError;
use mihrab_domain::settings::Settings;

use crate::error::StorageError;

const SELECT: &str = "SELECT document FROM settings WHERE id = 1";
const UPSERT: &str = "INSERT INTO settings (id, document) VALUES (1, ?) \
    ON CONFLICT (id) DO UPDATE SET document = excluded.document";

/// `SQLite`-backed settings repository.
pub struct SqliteSettingsRepository {
    pool: SqlitePool,
}

impl SqliteSettingsRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl SettingsRepository for SqliteSettingsRepository {
    fn load(&self) -> impl Future<Output = Result<Option<Settings>, MihrabError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<(String,)> = sqlx::query_as(SELECT)
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            row.map(|(document,)| serde_json::from_str(&document))
                .transpose()
                .map_err(StorageError::from)
                .map_err(MihrabError::from)
        }
    }

    fn save(&self, settings: Settings) -> impl Future<Output = Result<Settings, MihrabError>> + Send {
        let pool = self.pool.clone();
        async move {
            let document = serde_json::to_string(&settings).map_err(StorageError::from)?;
            sqlx::query(UPSERT)
                .bind(document)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(settings)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Config;

    async fn repo() -> SqliteSettingsRepository {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();
        SqliteSettingsRepository::new(db.pool().clone())
    }

    #[tokio::test]
    async fn should_return_none_before_first_save() {
        let repo = repo().await;
        assert_eq!(repo.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn should_replace_previous_document_on_save() {
        let repo = repo().await;

        repo.save(Settings::default()).await.unwrap();
        let custom = Settings {
            dark_theme: false,
            ads_enabled: false,
            ..Settings::default()
        };
        repo.save(custom).await.unwrap();

        assert_eq!(repo.load().await.unwrap(), Some(custom));
    }
}
