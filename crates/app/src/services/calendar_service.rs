//! Calendar service — Ramadan imsakiye and religious observances.

use mihrab_domain::calendar::{self, Observance, RamadanDay, RAMADAN_MONTH};
use mihrab_domain::error::MihrabError;
use mihrab_domain::time;

use crate::ports::{LocationProvider, PrayerTimesProvider};

/// The month-long Ramadan fasting timetable for the caller's location.
#[derive(Debug, Clone, PartialEq)]
pub struct RamadanImsakiye {
    /// Hijri year the timetable belongs to.
    pub hijri_year: u32,
    /// One row per day of the month.
    pub days: Vec<RamadanDay>,
}

/// Application service for calendar lookups.
pub struct CalendarService<P, L> {
    timings: P,
    location: L,
}

impl<P: PrayerTimesProvider, L: LocationProvider> CalendarService<P, L> {
    /// Create a new service backed by the given collaborators.
    pub fn new(timings: P, location: L) -> Self {
        Self { timings, location }
    }

    /// The Ramadan imsakiye for the current Hijri year at the current
    /// position. The Hijri year is resolved from today's date via the
    /// calendar collaborator, never computed locally.
    ///
    /// # Errors
    ///
    /// Returns [`MihrabError::Permission`] when location access is denied,
    /// or an upstream error from the calendar collaborator.
    pub async fn ramadan_imsakiye(&self) -> Result<RamadanImsakiye, MihrabError> {
        let position = self.location.current_position().await?;
        let hijri = self.timings.to_hijri(time::today()).await?;
        let days = self
            .timings
            .hijri_month(RAMADAN_MONTH, hijri.year, position)
            .await?;

        tracing::debug!(hijri_year = hijri.year, days = days.len(), "fetched imsakiye");
        Ok(RamadanImsakiye {
            hijri_year: hijri.year,
            days,
        })
    }

    /// Religious observances for a Gregorian year.
    ///
    /// # Errors
    ///
    /// Returns [`MihrabError::NotFound`] for years without curated data.
    pub fn observances(year: i32) -> Result<Vec<Observance>, MihrabError> {
        Ok(calendar::observances(year)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    use mihrab_domain::calendar::{FastingTimes, HijriDate};
    use mihrab_domain::geo::{GeoCoordinate, Place};

    use crate::ports::FetchedTimings;

    struct StubCalendar;

    impl PrayerTimesProvider for StubCalendar {
        async fn timings(
            &self,
            date: NaiveDate,
            _position: GeoCoordinate,
        ) -> Result<FetchedTimings, MihrabError> {
            Ok(FetchedTimings {
                date,
                hijri: None,
                timings: std::collections::HashMap::new(),
            })
        }

        async fn hijri_month(
            &self,
            month: u32,
            year: u32,
            _position: GeoCoordinate,
        ) -> Result<Vec<RamadanDay>, MihrabError> {
            assert_eq!(month, RAMADAN_MONTH);
            Ok(vec![RamadanDay {
                hijri_day: 1,
                hijri_year: year,
                readable: "01 Mar 2025".to_string(),
                timings: FastingTimes {
                    fajr: "05:43".to_string(),
                    sunrise: "07:08".to_string(),
                    dhuhr: "13:21".to_string(),
                    asr: "16:29".to_string(),
                    maghrib: "19:24".to_string(),
                    isha: "20:43".to_string(),
                },
            }])
        }

        async fn to_hijri(&self, _date: NaiveDate) -> Result<HijriDate, MihrabError> {
            Ok(HijriDate {
                day: 15,
                month: 8,
                month_name: "Shaʿbān".to_string(),
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
            Ok(None)
        }
    }

    #[tokio::test]
    async fn should_fetch_ramadan_for_resolved_hijri_year() {
        let svc = CalendarService::new(StubCalendar, StubLocation);
        let imsakiye = svc.ramadan_imsakiye().await.unwrap();
        assert_eq!(imsakiye.hijri_year, 1446);
        assert_eq!(imsakiye.days.len(), 1);
        assert_eq!(imsakiye.days[0].timings.maghrib, "19:24");
    }

    #[test]
    fn should_serve_curated_observances() {
        let list = CalendarService::<StubCalendar, StubLocation>::observances(2025).unwrap();
        assert!(!list.is_empty());
    }

    #[test]
    fn should_report_not_found_for_unknown_year() {
        let result = CalendarService::<StubCalendar, StubLocation>::observances(1999);
        assert!(matches!(result, Err(MihrabError::NotFound(_))));
    }
}
