//! Fixed-position implementation of [`LocationProvider`].

use std::future::Future;

use mihrab_app::ports::LocationProvider;
use mihrab_domain::error::{MihrabError, ValidationError};
use mihrab_domain::geo::{GeoCoordinate, Place};

/// A location provider that always reports one configured position.
pub struct FixedLocationProvider {
    position: GeoCoordinate,
    place: Option<Place>,
}

impl FixedLocationProvider {
    /// Create a provider for the given coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when the coordinates are out of range.
    pub fn new(
        latitude: f64,
        longitude: f64,
        place: Option<Place>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            position: GeoCoordinate::new(latitude, longitude)?,
            place,
        })
    }
}

impl LocationProvider for FixedLocationProvider {
    fn current_position(
        &self,
    ) -> impl Future<Output = Result<GeoCoordinate, MihrabError>> + Send {
        let position = self.position;
        async move { Ok(position) }
    }

    fn reverse_geocode(
        &self,
        _position: GeoCoordinate,
    ) -> impl Future<Output = Result<Option<Place>, MihrabError>> + Send {
        let place = self.place.clone();
        async move { Ok(place) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_report_the_configured_position() {
        let provider = FixedLocationProvider::new(51.5074, -0.1278, None).unwrap();
        let position = provider.current_position().await.unwrap();
        assert!((position.latitude() - 51.5074).abs() < 1e-9);
        assert!((position.longitude() + 0.1278).abs() < 1e-9);
    }

    #[tokio::test]
    async fn should_reject_out_of_range_coordinates() {
        assert!(FixedLocationProvider::new(91.0, 0.0, None).is_err());
    }

    #[tokio::test]
    async fn should_geocode_to_the_configured_place() {
        let place = Place {
            city: Some("Istanbul".to_string()),
            country: Some("Türkiye".to_string()),
        };
        let provider = FixedLocationProvider::new(41.0082, 28.9784, Some(place)).unwrap();
        let position = provider.current_position().await.unwrap();
        let found = provider.reverse_geocode(position).await.unwrap().unwrap();
        assert_eq!(found.city.as_deref(), Some("Istanbul"));
    }
}
