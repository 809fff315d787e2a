//! # mihrab-adapter-aladhan
//!
//! Client for the aladhan.com REST API, implementing
//! [`PrayerTimesProvider`]. All prayer-time astronomy and Hijri conversion
//! happens on the remote side; this crate only shapes requests and converts
//! responses into domain values.
//!
//! ## Dependency rule
//!
//! Depends on `mihrab-app` (port traits) and `mihrab-domain` only.

mod dto;
mod error;

pub use error::AladhanError;

use chrono::NaiveDate;

use mihrab_app::ports::{FetchedTimings, PrayerTimesProvider};
use mihrab_domain::calendar::{HijriDate, RamadanDay};
use mihrab_domain::error::MihrabError;
use mihrab_domain::geo::GeoCoordinate;

use dto::{CalendarDayDto, Envelope, GToHData, TimingsData};

/// Date format the API expects in paths and query strings.
const DATE_FORMAT: &str = "%d-%m-%Y";

/// Configuration for the aladhan client.
#[derive(Debug, Clone)]
pub struct Config {
    /// API origin, without a trailing slash.
    pub base_url: String,
    /// Calculation method id (3 is Muslim World League).
    pub method: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "https://api.aladhan.com".to_string(),
            method: 3,
        }
    }
}

/// aladhan.com API client. Cheap to clone; reuses one HTTP connection pool.
#[derive(Debug, Clone)]
pub struct AladhanClient {
    http: reqwest::Client,
    config: Config,
}

impl AladhanClient {
    /// Create a client with the given configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    async fn get_envelope<T>(&self, url: String, query: &[(&str, String)]) -> Result<T, AladhanError>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(AladhanError::transport)?
            .error_for_status()
            .map_err(AladhanError::transport)?;

        let envelope: Envelope<T> = response.json().await.map_err(AladhanError::decode)?;
        if envelope.code != 200 {
            return Err(AladhanError::Api(envelope.code));
        }
        Ok(envelope.data)
    }

    fn position_query(&self, position: GeoCoordinate) -> Vec<(&'static str, String)> {
        vec![
            ("latitude", position.latitude().to_string()),
            ("longitude", position.longitude().to_string()),
            ("method", self.config.method.to_string()),
        ]
    }
}

impl PrayerTimesProvider for AladhanClient {
    async fn timings(
        &self,
        date: NaiveDate,
        position: GeoCoordinate,
    ) -> Result<FetchedTimings, MihrabError> {
        let url = format!(
            "{}/v1/timings/{}",
            self.config.base_url,
            date.format(DATE_FORMAT)
        );
        tracing::debug!(%url, "fetching daily timings");

        let data: TimingsData = self
            .get_envelope(url, &self.position_query(position))
            .await?;
        Ok(data.into_fetched(date)?)
    }

    async fn hijri_month(
        &self,
        month: u32,
        year: u32,
        position: GeoCoordinate,
    ) -> Result<Vec<RamadanDay>, MihrabError> {
        let url = format!("{}/v1/hijriCalendar", self.config.base_url);
        let mut query = self.position_query(position);
        query.push(("month", month.to_string()));
        query.push(("year", year.to_string()));
        tracing::debug!(%url, month, year, "fetching hijri month calendar");

        let days: Vec<CalendarDayDto> = self.get_envelope(url, &query).await?;
        let rows = days
            .into_iter()
            .map(CalendarDayDto::into_ramadan_day)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    async fn to_hijri(&self, date: NaiveDate) -> Result<HijriDate, MihrabError> {
        let url = format!("{}/v1/gToH", self.config.base_url);
        let query = [("date", date.format(DATE_FORMAT).to_string())];
        tracing::debug!(%url, %date, "converting gregorian date to hijri");

        let data: GToHData = self.get_envelope(url, &query).await?;
        Ok(data.hijri.into_domain()?)
    }
}
