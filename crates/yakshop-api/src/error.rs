//! Error types for the Yak Shop API.
//!
//! [`ApiError`] converts into an Axum response with a JSON body of the form
//! `{"error": "...", "status": 400}`. Insufficient stock is not an error:
//! rejected and partial orders are ordinary responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use yakshop_core::{HerdError, ShopError};

/// Errors that can occur in the API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request body or path could not be parsed or failed validation.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The day offset is negative or beyond the configured maximum.
    #[error("invalid day: {0}")]
    InvalidDay(i64),

    /// An internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<ShopError> for ApiError {
    fn from(err: ShopError) -> Self {
        match err {
            ShopError::Herd {
                source: HerdError::InvalidDay { day },
            } => Self::InvalidDay(day),
            other => Self::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::InvalidRequest(_) | Self::InvalidDay(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = serde_json::json!({
            "error": self.to_string(),
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}
