//! # mihrab-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a REST JSON API mirroring the application's screens
//!   (`/api/qibla`, `/api/prayers/*`, `/api/quran/*`, …)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into HTTP responses
//!
//! ## Dependency rule
//! Depends on `mihrab-app` (for port traits and services) and `mihrab-domain`
//! (for domain types used in request/response mapping). Never leaks axum
//! types into the domain.

pub mod api;
mod error;
pub mod router;
pub mod state;

pub use error::ApiError;
