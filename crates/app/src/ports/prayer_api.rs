//! Prayer-times port — the remote timings/Hijri-calendar collaborator.
//!
//! All astronomical computation and Hijri conversion is delegated to the
//! remote service; this port only describes what the application needs back.

use std::collections::HashMap;
use std::future::Future;

use chrono::NaiveDate;

use mihrab_domain::calendar::{HijriDate, RamadanDay};
use mihrab_domain::error::MihrabError;
use mihrab_domain::geo::GeoCoordinate;

/// A fetched per-day timing document, still in raw string form.
///
/// `timings` maps prayer-key → raw time string (`"HH:MM"` possibly followed
/// by an annotation); parsing and validation happen in the domain so a
/// partially unusable document degrades instead of failing.
#[derive(Debug, Clone)]
pub struct FetchedTimings {
    /// Gregorian date the document is for.
    pub date: NaiveDate,
    /// Hijri date reported alongside, when present.
    pub hijri: Option<HijriDate>,
    /// Raw name → time-string mapping.
    pub timings: HashMap<String, String>,
}

/// Remote prayer-times and Hijri-calendar service.
pub trait PrayerTimesProvider {
    /// Timings for one Gregorian day at a position.
    fn timings(
        &self,
        date: NaiveDate,
        position: GeoCoordinate,
    ) -> impl Future<Output = Result<FetchedTimings, MihrabError>> + Send;

    /// The full timing table for one Hijri month at a position, one row per
    /// day (used for the Ramadan imsakiye).
    fn hijri_month(
        &self,
        month: u32,
        year: u32,
        position: GeoCoordinate,
    ) -> impl Future<Output = Result<Vec<RamadanDay>, MihrabError>> + Send;

    /// Convert a Gregorian date to its Hijri equivalent.
    fn to_hijri(
        &self,
        date: NaiveDate,
    ) -> impl Future<Output = Result<HijriDate, MihrabError>> + Send;
}

impl<T: PrayerTimesProvider + Send + Sync> PrayerTimesProvider for std::sync::Arc<T> {
    fn timings(
        &self,
        date: NaiveDate,
        position: GeoCoordinate,
    ) -> impl Future<Output = Result<FetchedTimings, MihrabError>> + Send {
        (**self).timings(date, position)
    }

    fn hijri_month(
        &self,
        month: u32,
        year: u32,
        position: GeoCoordinate,
    ) -> impl Future<Output = Result<Vec<RamadanDay>, MihrabError>> + Send {
        (**self).hijri_month(month, year, position)
    }

    fn to_hijri(
        &self,
        date: NaiveDate,
    ) -> impl Future<Output = Result<HijriDate, MihrabError>> + Send {
        (**self).to_hijri(date)
    }
}
