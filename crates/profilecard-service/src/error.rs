//! Error taxonomy of the profile API and its HTTP mapping

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use profilecard_repository::{StoreError, ValidationErrors};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Generic message for failures whose details stay in the server log
pub const INTERNAL_ERROR_MESSAGE: &str = "Внутренняя ошибка сервера";

/// Message for unmatched routes and methods
pub const NOT_FOUND_MESSAGE: &str = "Маршрут не найден";

/// Message for request bodies that are not JSON
pub const BAD_REQUEST_MESSAGE: &str = "Некорректное тело запроса";

/// Errors surfaced by the profile API
#[derive(Debug, Error)]
pub enum ApiError {
    /// Client-correctable field errors (400)
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// Store could not be read or written (500)
    #[error("{message}: {source}")]
    Storage {
        /// Client-facing message naming the failed operation
        message: &'static str,
        /// Underlying store failure, logged but never sent to the client
        source: StoreError,
    },

    /// Request body could not be parsed (400)
    #[error("Malformed request body: {0}")]
    BadRequest(String),

    /// Unmatched route or method (404)
    #[error("Route not found")]
    NotFound,

    /// Anything unexpected (500)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Create a storage error carrying the client-facing message
    pub fn storage(message: &'static str, source: StoreError) -> Self {
        Self::Storage { message, source }
    }

    /// HTTP status for this error
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Storage { .. } | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            Self::Validation(errors) => json!({ "errors": errors }),
            Self::Storage { message, source } => {
                error!(error = %source, "{message}");
                json!({ "error": message })
            }
            Self::BadRequest(reason) => {
                tracing::debug!(%reason, "Rejected request body");
                json!({ "error": BAD_REQUEST_MESSAGE })
            }
            Self::NotFound => json!({ "error": NOT_FOUND_MESSAGE }),
            Self::Internal(details) => {
                error!(%details, "Internal server error");
                json!({ "error": INTERNAL_ERROR_MESSAGE })
            }
        };

        (status, Json(body)).into_response()
    }
}
