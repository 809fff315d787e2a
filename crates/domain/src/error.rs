//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`MihrabError`]
//! at the crate seam. Adapter-owned sources (sqlx, reqwest, …) cross the
//! boundary boxed so the domain stays free of IO crates.

/// Top-level error returned by application services.
#[derive(Debug, thiserror::Error)]
pub enum MihrabError {
    /// A domain invariant was violated by caller input.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// The requested resource does not exist.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// A required permission was not granted.
    #[error("permission denied")]
    Permission(#[from] PermissionError),

    /// A remote API call failed or returned an unusable response.
    #[error("upstream error")]
    Upstream(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The storage layer failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Caller input rejected by a domain invariant.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// Latitude outside [-90, 90].
    #[error("latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),

    /// Longitude outside [-180, 180].
    #[error("longitude {0} is outside [-180, 180]")]
    LongitudeOutOfRange(f64),

    /// NaN or infinite coordinate component.
    #[error("coordinate must be a finite number")]
    NonFiniteCoordinate,

    /// Chapter id outside 1..=114.
    #[error("chapter {0} is outside 1..=114")]
    ChapterOutOfRange(u16),

    /// Page numbers start at 1.
    #[error("page {0} is outside 1..")]
    PageOutOfRange(u32),

    /// Schedule day offset beyond the supported window.
    #[error("day offset {0} is outside [-366, 366]")]
    OffsetOutOfRange(i64),

    /// Not one of the five daily prayer names.
    #[error("unknown prayer name: {0}")]
    UnknownPrayerName(String),
}

/// A lookup that produced no result.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("{entity} not found: {id}")]
pub struct NotFoundError {
    /// Human-readable entity kind (e.g. `"Chapter"`).
    pub entity: &'static str,
    /// Identifier that was looked up.
    pub id: String,
}

/// A collaborator refused access.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum PermissionError {
    /// The location collaborator reported that access was not granted.
    #[error("location permission denied")]
    LocationDenied,
}
