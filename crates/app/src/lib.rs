//! # mihrab-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `LocationProvider` — current position + reverse geocoding
//!   - `HeadingSensor` — cancellable compass-heading subscriptions
//!   - `PrayerTimesProvider` — daily timings, Hijri conversion, Hijri month
//!   - `QuranProvider` — chapter list and paged verses
//!   - `SettingsRepository` / `PrayerLogRepository` — persistence
//! - Define **driving/inbound ports** as use-case structs:
//!   - `QiblaService`, `PrayerScheduleService`, `QuranService`,
//!     `CalendarService`, `PrayerTrackerService`, `SettingsService`
//! - Provide **in-process infrastructure** (the heading subscription handle)
//!   that doesn't need IO
//! - Orchestrate domain objects without knowing *how* sensors, remote APIs,
//!   or persistence work
//!
//! ## Dependency rule
//! Depends on `mihrab-domain` only (plus `tokio::sync` for channels).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod heading;
pub mod ports;
pub mod services;
