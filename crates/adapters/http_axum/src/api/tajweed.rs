//! JSON handler for the tajweed reference.

use axum::Json;

use mihrab_domain::tajweed::{self, TajweedSection};

/// `GET /api/tajweed`
pub async fn reference() -> Json<&'static [TajweedSection]> {
    Json(tajweed::reference())
}
