//! # mihrab-domain
//!
//! Pure domain model for the mihrab Islamic daily-utilities service.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, wall-clock
//!   helpers
//! - Define **geographic values** (coordinates, the Kaaba target) and the
//!   great-circle bearing / heading normalization used by the Qibla compass
//! - Define the **prayer schedule** vocabulary (the five daily prayers,
//!   timetable parsing, next-prayer selection)
//! - Define **calendar** values (Hijri dates, Ramadan imsakiye rows,
//!   religious observances)
//! - Define **Quran** reading values (chapters, verses, verse pages)
//! - Define persisted **settings** and the **tajweed** reference data
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod calendar;
pub mod geo;
pub mod prayer;
pub mod quran;
pub mod settings;
pub mod tajweed;
