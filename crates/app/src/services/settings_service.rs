//! Settings service — load-or-default and save.

use mihrab_domain::error::MihrabError;
use mihrab_domain::settings::Settings;

use crate::ports::SettingsRepository;

/// Application service for the user settings document.
pub struct SettingsService<R> {
    repo: R,
}

impl<R: SettingsRepository> SettingsService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// The stored settings, or the defaults when nothing was ever saved.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn load(&self) -> Result<Settings, MihrabError> {
        Ok(self.repo.load().await?.unwrap_or_default())
    }

    /// Persist the settings document.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn save(&self, settings: Settings) -> Result<Settings, MihrabError> {
        self.repo.save(settings).await
    }
}
