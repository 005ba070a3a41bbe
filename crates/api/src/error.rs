//! Maps domain errors onto `{"error": message}` responses.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use excalc_core::calculator::CalculationError;
use excalc_rates::RateSourceError;
use excalc_shared::AppError;
use serde::Serialize;
use tracing::error;

/// Error returned by handlers.
#[derive(Debug)]
pub struct ApiError(pub AppError);

/// Result type for handlers.
pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if !self.0.is_client_error() {
            error!(code = self.0.error_code(), error = %self.0.message(), "Request failed");
        }

        (
            status,
            Json(ErrorBody {
                error: self.0.message(),
            }),
        )
            .into_response()
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<CalculationError> for ApiError {
    fn from(err: CalculationError) -> Self {
        if err.is_client_error() {
            Self(AppError::Validation(err.to_string()))
        } else {
            Self(AppError::Internal(err.to_string()))
        }
    }
}

impl From<RateSourceError> for ApiError {
    fn from(err: RateSourceError) -> Self {
        Self(AppError::UpstreamUnavailable(err.to_string()))
    }
}

// An unreadable body is not a validation failure: it surfaces as a 500.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(AppError::Internal(rejection.body_text()))
    }
}
