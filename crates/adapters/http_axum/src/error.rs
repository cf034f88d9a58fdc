//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use opsdash_domain::error::{OpsDashError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`OpsDashError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(OpsDashError);

impl From<OpsDashError> for ApiError {
    fn from(err: OpsDashError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            OpsDashError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            OpsDashError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            OpsDashError::Storage(err) => {
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
