use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use pulse_types::ErrorResponse;

use crate::error::MetricsError;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Computation(MetricsError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, details) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "Not Found", Some(msg)),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "Bad Request", Some(msg)),
            ApiError::Computation(err) => {
                tracing::error!("Metrics computation failed: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Computation Error",
                    Some(err.to_string()),
                )
            }
        };

        let error_response = ErrorResponse {
            error: message.to_string(),
            details,
        };

        (status, Json(error_response)).into_response()
    }
}

impl From<MetricsError> for ApiError {
    fn from(err: MetricsError) -> Self {
        ApiError::Computation(err)
    }
}
