//! Geographic values and the Qibla bearing math.
//!
//! The compass feature reduces to two pure computations: the initial
//! great-circle bearing from the observer to the Kaaba, and normalizing the
//! difference between that bearing and the device heading into [0, 360) to
//! drive a rotation.

use std::fmt;

use serde::Serialize;

use crate::error::ValidationError;

/// A validated geographic position in degrees.
///
/// Construction rejects NaN/infinite components and out-of-range values, so
/// the bearing math downstream never sees them. Fields are private; a value
/// that exists is a value that is valid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoCoordinate {
    latitude: f64,
    longitude: f64,
}

/// The Kaaba in Mecca — the fixed target of every Qibla computation.
pub const KAABA: GeoCoordinate = GeoCoordinate {
    latitude: 21.4225,
    longitude: 39.8262,
};

impl GeoCoordinate {
    /// Build a coordinate from latitude/longitude in degrees.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NonFiniteCoordinate`] for NaN or infinite
    /// components, [`ValidationError::LatitudeOutOfRange`] /
    /// [`ValidationError::LongitudeOutOfRange`] for values outside
    /// [-90, 90] / [-180, 180].
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, ValidationError> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(ValidationError::NonFiniteCoordinate);
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(ValidationError::LatitudeOutOfRange(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(ValidationError::LongitudeOutOfRange(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Latitude in degrees, in [-90, 90].
    #[must_use]
    pub fn latitude(self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees, in [-180, 180].
    #[must_use]
    pub fn longitude(self) -> f64 {
        self.longitude
    }
}

impl fmt::Display for GeoCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4},{:.4}", self.latitude, self.longitude)
    }
}

/// A reverse-geocoded place name for display next to the schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Place {
    /// City or nearest locality, when known.
    pub city: Option<String>,
    /// Country name, when known.
    pub country: Option<String>,
}

impl fmt::Display for Place {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<&str> = [self.city.as_deref(), self.country.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty())
            .collect();
        f.write_str(&parts.join(", "))
    }
}

/// Initial great-circle bearing from `from` to `to`, in degrees clockwise
/// from true north, normalized into [0, 360).
///
/// Uses the standard spherical forward-azimuth formula. Total for any pair
/// of valid coordinates; at the degenerate same-point case `atan2(0, 0)`
/// yields 0, which is in range.
#[must_use]
pub fn bearing_between(from: GeoCoordinate, to: GeoCoordinate) -> f64 {
    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let delta_lon = (to.longitude - from.longitude).to_radians();

    let y = delta_lon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * delta_lon.cos();

    // The +360 then modulo keeps tiny negative results (and the rounding
    // case where -epsilon + 360 lands exactly on 360) inside [0, 360).
    (y.atan2(x).to_degrees() + 360.0) % 360.0
}

/// Bearing from the observer to the Kaaba, in degrees in [0, 360).
#[must_use]
pub fn qibla_bearing(observer: GeoCoordinate) -> f64 {
    bearing_between(observer, KAABA)
}

/// Normalize an arbitrary angle delta into [0, 360).
///
/// The compass rotation is `qibla bearing − device heading`, which may be
/// negative or exceed 360 due to wraparound. Idempotent once normalized.
#[must_use]
pub fn normalize_degrees(angle: f64) -> f64 {
    ((angle % 360.0) + 360.0) % 360.0
}
