//! HTTP error responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::NaiveDateTime;
use serde::Serialize;

use clinic_core::ClinicError;

/// Error body returned for every failed request.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub timestamp: NaiveDateTime,
    pub code: String,
    pub details: String,
}

/// Wrapper turning service errors into HTTP responses.
pub struct ApiError(pub ClinicError);

impl From<ClinicError> for ApiError {
    fn from(e: ClinicError) -> Self {
        ApiError(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self.0 {
            ClinicError::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ClinicError::InvalidReference { .. } => (StatusCode::BAD_REQUEST, "INVALID_REQUEST"),
            ClinicError::Unavailable(_) => (StatusCode::SERVICE_UNAVAILABLE, "UNAVAILABLE"),
        };
        let body = ErrorResponse {
            timestamp: chrono::Utc::now().naive_utc(),
            code: code.to_string(),
            details: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
