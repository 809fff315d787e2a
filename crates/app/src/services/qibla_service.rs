//! Qibla service — bearing from the current position, compass rotation.

use mihrab_domain::error::MihrabError;
use mihrab_domain::geo::{self, GeoCoordinate};

use crate::ports::LocationProvider;

/// The computed Qibla readout for the current position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QiblaReadout {
    /// Position the bearing was computed from.
    pub position: GeoCoordinate,
    /// Bearing to the Kaaba in degrees [0, 360).
    pub bearing: f64,
}

/// Application service for the Qibla compass.
pub struct QiblaService<L> {
    location: L,
}

impl<L: LocationProvider> QiblaService<L> {
    /// Create a new service backed by the given location provider.
    pub fn new(location: L) -> Self {
        Self { location }
    }

    /// Compute the Qibla bearing for the current position.
    ///
    /// # Errors
    ///
    /// Returns [`MihrabError::Permission`] when location access is denied,
    /// or whatever the provider reports.
    pub async fn readout(&self) -> Result<QiblaReadout, MihrabError> {
        let position = self.location.current_position().await?;
        let bearing = geo::qibla_bearing(position);
        tracing::debug!(%position, bearing, "computed qibla bearing");
        Ok(QiblaReadout { position, bearing })
    }

    /// Rotation to apply to the compass needle: the bearing minus the
    /// device heading, normalized into [0, 360).
    #[must_use]
    pub fn rotation(bearing: f64, heading: f64) -> f64 {
        geo::normalize_degrees(bearing - heading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mihrab_domain::error::PermissionError;
    use mihrab_domain::geo::Place;

    struct FixedLocation(GeoCoordinate);

    impl LocationProvider for FixedLocation {
        async fn current_position(&self) -> Result<GeoCoordinate, MihrabError> {
            Ok(self.0)
        }
        async fn reverse_geocode(
            &self,
            _position: GeoCoordinate,
        ) -> Result<Option<Place>, MihrabError> {
            Ok(None)
        }
    }

    struct DeniedLocation;

    impl LocationProvider for DeniedLocation {
        async fn current_position(&self) -> Result<GeoCoordinate, MihrabError> {
            Err(PermissionError::LocationDenied.into())
        }
        async fn reverse_geocode(
            &self,
            _position: GeoCoordinate,
        ) -> Result<Option<Place>, MihrabError> {
            Ok(None)
        }
    }

    #[tokio::test]
    async fn should_compute_bearing_for_current_position() {
        // Due south of the Kaaba on its own meridian: bearing is due north.
        let position = GeoCoordinate::new(0.0, 39.8262).unwrap();
        let svc = QiblaService::new(FixedLocation(position));

        let readout = svc.readout().await.unwrap();
        assert_eq!(readout.position, position);
        assert!(readout.bearing.abs() < 1e-9);
    }

    #[tokio::test]
    async fn should_propagate_permission_denied() {
        let svc = QiblaService::new(DeniedLocation);
        let result = svc.readout().await;
        assert!(matches!(result, Err(MihrabError::Permission(_))));
    }

    #[test]
    fn should_normalize_rotation_across_wraparound() {
        // Bearing 10°, heading 40°: the needle turns 330°, not -30°.
        let rotation = QiblaService::<FixedLocation>::rotation(10.0, 40.0);
        assert!((rotation - 330.0).abs() < 1e-9);
    }
}
