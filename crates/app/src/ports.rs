//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside
//! world. They are defined here (in `app`) so that both the use-case layer
//! and the adapter layer can depend on them without creating circular
//! dependencies.

pub mod location;
pub mod prayer_api;
pub mod quran_api;
pub mod sensors;
pub mod storage;

pub use location::LocationProvider;
pub use prayer_api::{FetchedTimings, PrayerTimesProvider};
pub use quran_api::QuranProvider;
pub use sensors::HeadingSensor;
pub use storage::{PrayerLogRepository, SettingsRepository};
