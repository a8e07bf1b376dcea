use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::domain::gateways::MailerError;

/// Error body returned by every failing endpoint response.
///
/// The response contract is fixed: `{"success": false, "error": "..."}`.
#[derive(Debug, Serialize)]
struct ErrorBody {
    success: bool,
    error: String,
}

#[derive(Debug)]
pub enum AppError {
    /// Client error: the request is missing required data (400).
    Validation { message: String },
    /// Anything that failed during parsing, rendering, or dispatch (500).
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        let message = message.into();
        Self::Internal {
            message: if message.is_empty() {
                "An unknown error occurred".to_string()
            } else {
                message
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        let body = ErrorBody {
            success: false,
            error: message,
        };

        (status, Json(body)).into_response()
    }
}

impl From<MailerError> for AppError {
    fn from(e: MailerError) -> Self {
        AppError::internal(e.to_string())
    }
}

impl From<askama::Error> for AppError {
    fn from(e: askama::Error) -> Self {
        AppError::internal(format!("failed to render email: {e}"))
    }
}
