//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use mihrab_domain::error::MihrabError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`MihrabError`] to an HTTP response with appropriate status code.
pub struct ApiError(MihrabError);

impl From<MihrabError> for ApiError {
    fn from(err: MihrabError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            MihrabError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            MihrabError::Permission(err) => (StatusCode::FORBIDDEN, err.to_string()),
            MihrabError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            MihrabError::Upstream(err) => {
                tracing::error!(error = %err, "upstream error");
                (StatusCode::BAD_GATEWAY, "upstream service error".to_string())
            }
            MihrabError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mihrab_domain::error::{PermissionError, ValidationError};

    #[test]
    fn should_map_validation_to_bad_request() {
        let err = ApiError::from(MihrabError::from(ValidationError::PageOutOfRange(0)));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn should_map_permission_to_forbidden() {
        let err = ApiError::from(MihrabError::from(PermissionError::LocationDenied));
        assert_eq!(err.into_response().status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn should_map_upstream_to_bad_gateway() {
        let source = std::io::Error::other("connection reset");
        let err = ApiError::from(MihrabError::Upstream(Box::new(source)));
        assert_eq!(err.into_response().status(), StatusCode::BAD_GATEWAY);
    }
}
