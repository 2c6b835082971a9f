//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use campuscoffee_domain::error::CampusCoffeeError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`CampusCoffeeError`] to an HTTP response with appropriate status
/// code.
pub struct ApiError(CampusCoffeeError);

impl From<CampusCoffeeError> for ApiError {
    fn from(err: CampusCoffeeError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            CampusCoffeeError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            CampusCoffeeError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            CampusCoffeeError::Duplicate(err) => (StatusCode::CONFLICT, err.to_string()),
            CampusCoffeeError::Storage(err) => {
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
