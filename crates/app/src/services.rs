//! Application services — one struct per use-case, generic over ports.

pub mod calendar_service;
pub mod prayer_schedule_service;
pub mod qibla_service;
pub mod quran_service;
pub mod settings_service;
pub mod tracker_service;
