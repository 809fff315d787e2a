//! Hijri calendar values, the Ramadan imsakiye, and religious observances.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::NotFoundError;

/// Hijri month number of Ramadan.
pub const RAMADAN_MONTH: u32 = 9;

/// A date on the Hijri (lunar Islamic) calendar, as reported by the
/// calendar collaborator. Never computed locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HijriDate {
    /// Day of the Hijri month, 1..=30.
    pub day: u32,
    /// Hijri month number, 1..=12.
    pub month: u32,
    /// Month name in English (e.g. `"Ramaḍān"`).
    pub month_name: String,
    /// Hijri year (e.g. 1446).
    pub year: u32,
}

impl fmt::Display for HijriDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.day, self.month_name, self.year)
    }
}

/// Fasting-relevant times for one day, each in `HH:MM` form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FastingTimes {
    /// Start of the fast (Fajr / imsak).
    pub fajr: String,
    pub sunrise: String,
    pub dhuhr: String,
    pub asr: String,
    /// End of the fast (Maghrib / iftar).
    pub maghrib: String,
    pub isha: String,
}

/// One row of the Ramadan imsakiye (the month-long fasting timetable).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RamadanDay {
    /// Day of Ramadan, 1..=30.
    pub hijri_day: u32,
    /// Hijri year the month belongs to.
    pub hijri_year: u32,
    /// Human-readable Gregorian date (e.g. `"01 Mar 2025"`).
    pub readable: String,
    /// The day's fasting times.
    pub timings: FastingTimes,
}

/// Kind of religious observance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ObservanceKind {
    /// A holy night (kandil).
    HolyNight,
    /// Start of Ramadan.
    Ramadan,
    /// Eid al-Fitr (including its eve).
    EidAlFitr,
    /// Eid al-Adha (including its eve).
    EidAlAdha,
}

/// A dated religious observance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Observance {
    /// Gregorian date of the observance.
    pub date: NaiveDate,
    /// Display name.
    pub name: &'static str,
    /// Classification for grouping in clients.
    pub kind: ObservanceKind,
}

// Gregorian dates for the supported year, (month, day, name, kind).
const OBSERVANCES_2025: &[(u32, u32, &str, ObservanceKind)] = &[
    (1, 2, "Laylat al-Raghaib", ObservanceKind::HolyNight),
    (1, 26, "Laylat al-Miraj", ObservanceKind::HolyNight),
    (2, 13, "Laylat al-Baraat", ObservanceKind::HolyNight),
    (3, 1, "First day of Ramadan", ObservanceKind::Ramadan),
    (3, 26, "Laylat al-Qadr", ObservanceKind::HolyNight),
    (3, 29, "Eve of Eid al-Fitr", ObservanceKind::EidAlFitr),
    (3, 30, "Eid al-Fitr, day 1", ObservanceKind::EidAlFitr),
    (3, 31, "Eid al-Fitr, day 2", ObservanceKind::EidAlFitr),
    (4, 1, "Eid al-Fitr, day 3", ObservanceKind::EidAlFitr),
    (6, 5, "Eve of Eid al-Adha", ObservanceKind::EidAlAdha),
    (6, 6, "Eid al-Adha, day 1", ObservanceKind::EidAlAdha),
    (6, 7, "Eid al-Adha, day 2", ObservanceKind::EidAlAdha),
    (6, 8, "Eid al-Adha, day 3", ObservanceKind::EidAlAdha),
    (6, 9, "Eid al-Adha, day 4", ObservanceKind::EidAlAdha),
];

/// Religious observances for the given Gregorian year, in date order.
///
/// Only years with curated data are served; guessing lunar dates for other
/// years is explicitly out of scope.
///
/// # Errors
///
/// Returns [`NotFoundError`] for years without a curated table.
pub fn observances(year: i32) -> Result<Vec<Observance>, NotFoundError> {
    let table = match year {
        2025 => OBSERVANCES_2025,
        _ => {
            return Err(NotFoundError {
                entity: "Observances",
                id: year.to_string(),
            });
        }
    };

    Ok(table
        .iter()
        .filter_map(|&(month, day, name, kind)| {
            NaiveDate::from_ymd_opt(year, month, day).map(|date| Observance { date, name, kind })
        })
        .collect())
}
