//! The five daily prayers: timetable parsing and next-prayer selection.
//!
//! The timings collaborator returns raw per-prayer strings such as
//! `"05:12 (+03)"`. Parsing is deliberately forgiving: an entry that cannot
//! be parsed is dropped and the rest of the table survives. An entirely
//! unusable table parses to an empty schedule, which downstream means
//! "no next prayer".

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// One of the five canonical daily prayers, in fixed daily order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrayerName {
    Fajr,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

impl PrayerName {
    /// The canonical daily order. Every schedule walk uses this, so parsed
    /// tables are ordered by construction.
    pub const DAILY_ORDER: [Self; 5] = [
        Self::Fajr,
        Self::Dhuhr,
        Self::Asr,
        Self::Maghrib,
        Self::Isha,
    ];

    /// Canonical key, matching the aladhan timing field names.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fajr => "Fajr",
            Self::Dhuhr => "Dhuhr",
            Self::Asr => "Asr",
            Self::Maghrib => "Maghrib",
            Self::Isha => "Isha",
        }
    }
}

impl fmt::Display for PrayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PrayerName {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::DAILY_ORDER
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownPrayerName(s.to_string()))
    }
}

/// A single parsed prayer time for the current day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PrayerTimeEntry {
    /// Which prayer this is.
    pub name: PrayerName,
    /// Hour of day, 0..=23.
    pub hour: u8,
    /// Minute, 0..=59.
    pub minute: u8,
}

impl PrayerTimeEntry {
    /// Parse a raw timing string (`"HH:MM"`, possibly followed by a
    /// space-separated annotation such as a timezone suffix).
    ///
    /// Returns `None` for anything that does not yield an in-range
    /// hour/minute pair — the caller drops the entry rather than failing.
    #[must_use]
    pub fn parse(name: PrayerName, raw: &str) -> Option<Self> {
        let time_part = clock_part(raw);
        let (hour, minute) = time_part.split_once(':')?;
        let hour: u8 = hour.trim().parse().ok()?;
        let minute: u8 = minute.trim().parse().ok()?;
        if hour > 23 || minute > 59 {
            return None;
        }
        Some(Self { name, hour, minute })
    }

    /// The `HH:MM` display form.
    #[must_use]
    pub fn time_string(self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }

    fn time_of_day(self) -> Option<NaiveTime> {
        NaiveTime::from_hms_opt(u32::from(self.hour), u32::from(self.minute), 0)
    }
}

/// The substring of a raw timing value before its first space.
///
/// aladhan appends annotations like `"(+03)"` after the clock time.
#[must_use]
pub fn clock_part(raw: &str) -> &str {
    raw.split(' ').next().unwrap_or(raw)
}

/// Parse a raw name→string timing map into an ordered schedule.
///
/// Walks [`PrayerName::DAILY_ORDER`]; missing or unparsable entries are
/// silently omitted, so each prayer appears at most once and always in
/// canonical order. Never fails as a whole.
#[must_use]
pub fn parse_time_table(raw: &HashMap<String, String>) -> Vec<PrayerTimeEntry> {
    PrayerName::DAILY_ORDER
        .into_iter()
        .filter_map(|name| {
            raw.get(name.as_str())
                .and_then(|value| PrayerTimeEntry::parse(name, value))
        })
        .collect()
}

/// The upcoming prayer and its countdown, derived per tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NextPrayer {
    /// Which prayer is next.
    pub name: PrayerName,
    /// Its `HH:MM` display time.
    pub time: String,
    /// Whole hours until it starts.
    pub hours_remaining: u32,
    /// Remaining minutes after the whole hours, 0..=59.
    pub minutes_remaining: u32,
}

/// Find the first entry strictly after `now` on the same calendar day.
///
/// Returns `None` when every prayer has already passed — the caller decides
/// whether to show "no next prayer today" (there is no automatic rollover
/// to the next day's table). The countdown is the millisecond difference
/// integer-divided into whole minutes, then split into hours and minutes;
/// a non-positive difference (clock skew between the comparison and the
/// subtraction) also yields `None` rather than a negative countdown.
#[must_use]
pub fn select_next_prayer(entries: &[PrayerTimeEntry], now: NaiveDateTime) -> Option<NextPrayer> {
    let entry = entries.iter().copied().find(|entry| {
        entry
            .time_of_day()
            .is_some_and(|time| now.date().and_time(time) > now)
    })?;

    let candidate = now.date().and_time(entry.time_of_day()?);
    let remaining_ms = (candidate - now).num_milliseconds();
    if remaining_ms <= 0 {
        return None;
    }

    let total_minutes = remaining_ms / 60_000;
    let hours = u32::try_from(total_minutes / 60).ok()?;
    let minutes = u32::try_from(total_minutes % 60).ok()?;

    Some(NextPrayer {
        name: entry.name,
        time: entry.time_string(),
        hours_remaining: hours,
        minutes_remaining: minutes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};

    fn table(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 14)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn full_day() -> Vec<PrayerTimeEntry> {
        parse_time_table(&table(&[
            ("Fajr", "05:00"),
            ("Dhuhr", "12:00"),
            ("Asr", "15:00"),
            ("Maghrib", "18:00"),
            ("Isha", "20:00"),
        ]))
    }

    #[test]
    fn should_parse_entry_with_timezone_suffix() {
        let entry = PrayerTimeEntry::parse(PrayerName::Fajr, "05:12 (+03)").unwrap();
        assert_eq!(entry.hour, 5);
        assert_eq!(entry.minute, 12);
        assert_eq!(entry.time_string(), "05:12");
    }

    #[test]
    fn should_reject_entry_without_colon() {
        assert_eq!(PrayerTimeEntry::parse(PrayerName::Asr, "bad"), None);
    }

    #[test]
    fn should_reject_entry_with_out_of_range_hour() {
        assert_eq!(PrayerTimeEntry::parse(PrayerName::Asr, "24:00"), None);
    }

    #[test]
    fn should_reject_entry_with_out_of_range_minute() {
        assert_eq!(PrayerTimeEntry::parse(PrayerName::Asr, "10:60"), None);
    }

    #[test]
    fn should_omit_unparsable_entries_and_keep_order() {
        let entries = parse_time_table(&table(&[
            ("Fajr", "05:12 (GMT)"),
            ("Dhuhr", "12:30"),
            ("Asr", "bad"),
            ("Maghrib", "18:45"),
            ("Isha", "20:01"),
        ]));

        let names: Vec<PrayerName> = entries.iter().map(|e| e.name).collect();
        assert_eq!(
            names,
            vec![
                PrayerName::Fajr,
                PrayerName::Dhuhr,
                PrayerName::Maghrib,
                PrayerName::Isha
            ]
        );
    }

    #[test]
    fn should_omit_missing_entries() {
        let entries = parse_time_table(&table(&[("Dhuhr", "12:30")]));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, PrayerName::Dhuhr);
    }

    #[test]
    fn should_produce_empty_schedule_from_empty_table() {
        assert!(parse_time_table(&HashMap::new()).is_empty());
    }

    #[test]
    fn should_ignore_unknown_keys() {
        let entries = parse_time_table(&table(&[("Sunrise", "06:45"), ("Fajr", "05:00")]));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, PrayerName::Fajr);
    }

    #[test]
    fn should_select_asr_in_the_afternoon() {
        let next = select_next_prayer(&full_day(), at(14, 0)).unwrap();
        assert_eq!(next.name, PrayerName::Asr);
        assert_eq!(next.time, "15:00");
        assert_eq!(next.hours_remaining, 1);
        assert_eq!(next.minutes_remaining, 0);
    }

    #[test]
    fn should_select_fajr_just_after_midnight() {
        let next = select_next_prayer(&full_day(), at(0, 30)).unwrap();
        assert_eq!(next.name, PrayerName::Fajr);
        assert_eq!(next.hours_remaining, 4);
        assert_eq!(next.minutes_remaining, 30);
    }

    #[test]
    fn should_return_none_after_isha() {
        assert_eq!(select_next_prayer(&full_day(), at(21, 0)), None);
    }

    #[test]
    fn should_skip_entry_exactly_at_now() {
        // Strict inequality: 15:00 exactly is not "upcoming" for Asr.
        let next = select_next_prayer(&full_day(), at(15, 0)).unwrap();
        assert_eq!(next.name, PrayerName::Maghrib);
    }

    #[test]
    fn should_return_none_for_empty_schedule() {
        assert_eq!(select_next_prayer(&[], at(10, 0)), None);
    }

    #[test]
    fn should_floor_sub_minute_remainders() {
        let entries = parse_time_table(&table(&[("Dhuhr", "12:00")]));
        let now = at(11, 59).with_second(30).unwrap();
        let next = select_next_prayer(&entries, now).unwrap();
        assert_eq!(next.hours_remaining, 0);
        assert_eq!(next.minutes_remaining, 0);
    }

    #[test]
    fn should_parse_prayer_name_round_trip() {
        for name in PrayerName::DAILY_ORDER {
            let parsed: PrayerName = name.as_str().parse().unwrap();
            assert_eq!(parsed, name);
        }
        assert!("Sunrise".parse::<PrayerName>().is_err());
    }
}
