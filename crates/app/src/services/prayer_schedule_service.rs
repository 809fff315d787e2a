//! Prayer schedule service — fetch, parse, and derive the next prayer.

use chrono::{Duration, NaiveDate, NaiveDateTime};

use mihrab_domain::calendar::HijriDate;
use mihrab_domain::error::{MihrabError, ValidationError};
use mihrab_domain::geo::Place;
use mihrab_domain::prayer::{self, NextPrayer, PrayerTimeEntry};
use mihrab_domain::time;

use crate::ports::{LocationProvider, PrayerTimesProvider};

/// Largest day offset a caller may page forward/backward.
const MAX_OFFSET_DAYS: i64 = 366;

/// The parsed schedule for one day, ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct PrayerSchedule {
    /// Gregorian date of the schedule.
    pub date: NaiveDate,
    /// Hijri date reported by the collaborator, when present.
    pub hijri: Option<HijriDate>,
    /// Reverse-geocoded place, when known.
    pub place: Option<Place>,
    /// Parsed entries in canonical order; unparsable entries are absent.
    pub entries: Vec<PrayerTimeEntry>,
}

/// Application service for the daily prayer schedule and the next-prayer
/// countdown.
pub struct PrayerScheduleService<P, L> {
    timings: P,
    location: L,
}

impl<P: PrayerTimesProvider, L: LocationProvider> PrayerScheduleService<P, L> {
    /// Create a new service backed by the given collaborators.
    pub fn new(timings: P, location: L) -> Self {
        Self { timings, location }
    }

    /// The schedule for today plus `offset_days` at the current position.
    ///
    /// A failed reverse geocode only costs the place label; a partially
    /// unparsable timing table degrades to fewer entries.
    ///
    /// # Errors
    ///
    /// Returns [`MihrabError::Validation`] for offsets beyond a year,
    /// [`MihrabError::Permission`] when location access is denied, or an
    /// upstream error from the timings collaborator.
    pub async fn schedule(&self, offset_days: i64) -> Result<PrayerSchedule, MihrabError> {
        if offset_days.abs() > MAX_OFFSET_DAYS {
            return Err(ValidationError::OffsetOutOfRange(offset_days).into());
        }

        let position = self.location.current_position().await?;
        let date = time::today() + Duration::days(offset_days);
        let fetched = self.timings.timings(date, position).await?;

        let place = match self.location.reverse_geocode(position).await {
            Ok(place) => place,
            Err(err) => {
                tracing::debug!(error = %err, "reverse geocode failed, omitting place");
                None
            }
        };

        let entries = prayer::parse_time_table(&fetched.timings);
        tracing::debug!(%date, entries = entries.len(), "parsed prayer schedule");

        Ok(PrayerSchedule {
            date: fetched.date,
            hijri: fetched.hijri,
            place,
            entries,
        })
    }

    /// The next upcoming prayer today, or `None` when all have passed.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`schedule`](Self::schedule).
    pub async fn next_prayer(&self) -> Result<Option<NextPrayer>, MihrabError> {
        let schedule = self.schedule(0).await?;
        Ok(Self::next_prayer_at(&schedule, time::local_now()))
    }

    /// Pure selection against an explicit clock, for callers that tick.
    #[must_use]
    pub fn next_prayer_at(schedule: &PrayerSchedule, now: NaiveDateTime) -> Option<NextPrayer> {
        prayer::select_next_prayer(&schedule.entries, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use mihrab_domain::geo::GeoCoordinate;
    use mihrab_domain::prayer::PrayerName;

    use crate::ports::FetchedTimings;

    struct StubTimings {
        timings: HashMap<String, String>,
    }

    impl StubTimings {
        fn full() -> Self {
            let timings = [
                ("Fajr", "05:00"),
                ("Dhuhr", "12:00"),
                ("Asr", "15:00 (+03)"),
                ("Maghrib", "18:00"),
                ("Isha", "garbage"),
            ]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
            Self { timings }
        }
    }

    impl PrayerTimesProvider for StubTimings {
        async fn timings(
            &self,
            date: NaiveDate,
            _position: GeoCoordinate,
        ) -> Result<FetchedTimings, MihrabError> {
            Ok(FetchedTimings {
                date,
                hijri: None,
                timings: self.timings.clone(),
            })
        }

        async fn hijri_month(
            &self,
            _month: u32,
            _year: u32,
            _position: GeoCoordinate,
        ) -> Result<Vec<mihrab_domain::calendar::RamadanDay>, MihrabError> {
            Ok(vec![])
        }

        async fn to_hijri(&self, _date: NaiveDate) -> Result<HijriDate, MihrabError> {
            Ok(HijriDate {
                day: 1,
                month: 9,
                month_name: "Ramaḍān".to_string(),
                year: 1446,
            })
        }
    }

    struct StubLocation;

    impl LocationProvider for StubLocation {
        async fn current_position(&self) -> Result<GeoCoordinate, MihrabError> {
            Ok(GeoCoordinate::new(41.0082, 28.9784).unwrap())
        }
        async fn reverse_geocode(
            &self,
            _position: GeoCoordinate,
        ) -> Result<Option<Place>, MihrabError> {
            Ok(Some(Place {
                city: Some("Istanbul".to_string()),
                country: Some("Türkiye".to_string()),
            }))
        }
    }

    fn service() -> PrayerScheduleService<StubTimings, StubLocation> {
        PrayerScheduleService::new(StubTimings::full(), StubLocation)
    }

    #[tokio::test]
    async fn should_parse_schedule_and_drop_bad_entries() {
        let schedule = service().schedule(0).await.unwrap();
        let names: Vec<PrayerName> = schedule.entries.iter().map(|e| e.name).collect();
        assert_eq!(
            names,
            vec![
                PrayerName::Fajr,
                PrayerName::Dhuhr,
                PrayerName::Asr,
                PrayerName::Maghrib
            ]
        );
        assert_eq!(schedule.place.as_ref().unwrap().city.as_deref(), Some("Istanbul"));
    }

    #[tokio::test]
    async fn should_reject_offsets_beyond_a_year() {
        let result = service().schedule(400).await;
        assert!(matches!(
            result,
            Err(MihrabError::Validation(ValidationError::OffsetOutOfRange(400)))
        ));
    }

    #[tokio::test]
    async fn should_select_next_prayer_against_explicit_clock() {
        let schedule = service().schedule(0).await.unwrap();
        let now = schedule.date.and_hms_opt(14, 0, 0).unwrap();

        let next =
            PrayerScheduleService::<StubTimings, StubLocation>::next_prayer_at(&schedule, now)
                .unwrap();
        assert_eq!(next.name, PrayerName::Asr);
        assert_eq!(next.hours_remaining, 1);
        assert_eq!(next.minutes_remaining, 0);
    }

    #[tokio::test]
    async fn should_report_none_after_last_prayer() {
        let schedule = service().schedule(0).await.unwrap();
        let now = schedule.date.and_hms_opt(23, 0, 0).unwrap();
        assert!(
            PrayerScheduleService::<StubTimings, StubLocation>::next_prayer_at(&schedule, now)
                .is_none()
        );
    }
}
