//! # mihrab-adapter-quran-com
//!
//! Client for the quran.com v4 REST API, implementing [`QuranProvider`].
//! Chapter metadata and Uthmani verse text both come from the remote side;
//! this crate shapes requests and converts responses into domain values.
//!
//! ## Dependency rule
//!
//! Depends on `mihrab-app` (port traits) and `mihrab-domain` only.

mod dto;
mod error;

pub use error::QuranComError;

use mihrab_app::ports::QuranProvider;
use mihrab_domain::error::MihrabError;
use mihrab_domain::quran::{Chapter, VersePage};

use dto::{ChaptersResponse, VersesResponse};

/// Configuration for the quran.com client.
#[derive(Debug, Clone)]
pub struct Config {
    /// API origin, without a trailing slash.
    pub base_url: String,
    /// Language for translated chapter names.
    pub language: String,
    /// Verses per page.
    pub per_page: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "https://api.quran.com/api/v4".to_string(),
            language: "en".to_string(),
            per_page: 10,
        }
    }
}

/// quran.com API client. Cheap to clone; reuses one HTTP connection pool.
#[derive(Debug, Clone)]
pub struct QuranComClient {
    http: reqwest::Client,
    config: Config,
}

impl QuranComClient {
    /// Create a client with the given configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    async fn get_json<T>(&self, url: String, query: &[(&str, String)]) -> Result<T, QuranComError>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(QuranComError::transport)?
            .error_for_status()
            .map_err(QuranComError::transport)?;

        response.json().await.map_err(QuranComError::decode)
    }
}

impl QuranProvider for QuranComClient {
    async fn chapters(&self) -> Result<Vec<Chapter>, MihrabError> {
        let url = format!("{}/chapters", self.config.base_url);
        let query = [("language", self.config.language.clone())];
        tracing::debug!(%url, "fetching chapter list");

        let body: ChaptersResponse = self.get_json(url, &query).await?;
        Ok(body.chapters.into_iter().map(Into::into).collect())
    }

    async fn verses(&self, chapter_id: u16, page: u32) -> Result<VersePage, MihrabError> {
        let url = format!(
            "{}/verses/by_chapter/{chapter_id}",
            self.config.base_url
        );
        let query = [
            ("language", "ar".to_string()),
            ("words", "false".to_string()),
            ("page", page.to_string()),
            ("per_page", self.config.per_page.to_string()),
            ("fields", "text_uthmani".to_string()),
        ];
        tracing::debug!(%url, chapter_id, page, "fetching verse page");

        let body: VersesResponse = self.get_json(url, &query).await?;
        Ok(body.into_page(chapter_id, page))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_v4_api_with_ten_verses_per_page() {
        let config = Config::default();
        assert_eq!(config.base_url, "https://api.quran.com/api/v4");
        assert_eq!(config.language, "en");
        assert_eq!(config.per_page, 10);
    }
}
