//! Wire types mirroring the aladhan.com JSON, kept out of the domain.
//!
//! aladhan encodes Hijri day/year as strings and wraps everything in a
//! `{code, status, data}` envelope; conversion into domain values happens
//! here so the rest of the system never sees the quirks.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Deserialize;

use mihrab_app::ports::FetchedTimings;
use mihrab_domain::calendar::{FastingTimes, HijriDate, RamadanDay};
use mihrab_domain::prayer::clock_part;

use crate::error::AladhanError;

/// Response envelope common to every endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    pub code: i64,
    pub data: T,
}

/// `data` for `/v1/timings/{date}`.
#[derive(Debug, Deserialize)]
pub(crate) struct TimingsData {
    pub timings: HashMap<String, String>,
    pub date: DateInfo,
}

impl TimingsData {
    pub(crate) fn into_fetched(self, requested: NaiveDate) -> Result<FetchedTimings, AladhanError> {
        let hijri = self.date.hijri.map(HijriDto::into_domain).transpose()?;
        Ok(FetchedTimings {
            date: requested,
            hijri,
            timings: self.timings,
        })
    }
}

/// `data` for `/v1/gToH`.
#[derive(Debug, Deserialize)]
pub(crate) struct GToHData {
    pub hijri: HijriDto,
}

/// One row of `data` for `/v1/hijriCalendar`.
#[derive(Debug, Deserialize)]
pub(crate) struct CalendarDayDto {
    pub timings: HashMap<String, String>,
    pub date: DateInfo,
}

impl CalendarDayDto {
    pub(crate) fn into_ramadan_day(self) -> Result<RamadanDay, AladhanError> {
        let hijri = self
            .date
            .hijri
            .ok_or(AladhanError::Malformed("date.hijri"))?
            .into_domain()?;

        let time = |key: &'static str| -> Result<String, AladhanError> {
            self.timings
                .get(key)
                .map(|raw| clock_part(raw).to_string())
                .ok_or(AladhanError::Malformed("timings"))
        };

        Ok(RamadanDay {
            hijri_day: hijri.day,
            hijri_year: hijri.year,
            readable: self.date.readable.unwrap_or_default(),
            timings: FastingTimes {
                fajr: time("Fajr")?,
                sunrise: time("Sunrise")?,
                dhuhr: time("Dhuhr")?,
                asr: time("Asr")?,
                maghrib: time("Maghrib")?,
                isha: time("Isha")?,
            },
        })
    }
}

/// Date block attached to timings and calendar rows.
#[derive(Debug, Deserialize)]
pub(crate) struct DateInfo {
    #[serde(default)]
    pub readable: Option<String>,
    #[serde(default)]
    pub hijri: Option<HijriDto>,
}

/// Hijri date as the API encodes it (day and year are strings).
#[derive(Debug, Deserialize)]
pub(crate) struct HijriDto {
    pub day: String,
    pub year: String,
    pub month: MonthDto,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MonthDto {
    pub number: u32,
    pub en: String,
}

impl HijriDto {
    pub(crate) fn into_domain(self) -> Result<HijriDate, AladhanError> {
        let day = self
            .day
            .trim()
            .parse()
            .map_err(|_| AladhanError::Malformed("hijri.day"))?;
        let year = self
            .year
            .trim()
            .parse()
            .map_err(|_| AladhanError::Malformed("hijri.year"))?;
        Ok(HijriDate {
            day,
            month: self.month.number,
            month_name: self.month.en,
            year,
        })
    }
}
