//! Location port — position fixes and reverse geocoding.

use std::future::Future;

use mihrab_domain::error::MihrabError;
use mihrab_domain::geo::{GeoCoordinate, Place};

/// Supplies the device/user position.
///
/// A denied permission surfaces as [`MihrabError::Permission`]; an invalid
/// fix (NaN and friends) must be rejected by the adapter before a
/// [`GeoCoordinate`] is ever built, so the domain math never sees it.
pub trait LocationProvider {
    /// The current position.
    fn current_position(&self)
    -> impl Future<Output = Result<GeoCoordinate, MihrabError>> + Send;

    /// Best-effort place name for a position. `None` when nothing is known.
    fn reverse_geocode(
        &self,
        position: GeoCoordinate,
    ) -> impl Future<Output = Result<Option<Place>, MihrabError>> + Send;
}

impl<T: LocationProvider + Send + Sync> LocationProvider for std::sync::Arc<T> {
    fn current_position(
        &self,
    ) -> impl Future<Output = Result<GeoCoordinate, MihrabError>> + Send {
        (**self).current_position()
    }

    fn reverse_geocode(
        &self,
        position: GeoCoordinate,
    ) -> impl Future<Output = Result<Option<Place>, MihrabError>> + Send {
        (**self).reverse_geocode(position)
    }
}
