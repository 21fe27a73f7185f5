use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),
    #[error("Invalid credentials")]
    Unauthorized,
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Analytics error: {0}")]
    Analytics(#[from] analytics::AnalyticsError),
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Converts our custom `AppError` into an HTTP response.
///
/// Every error body carries an `error` field; client errors add a `message`
/// explaining what to fix.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "Bad request", "message": message }),
            ),
            AppError::Analytics(err) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "Bad request", "message": err.to_string() }),
            ),
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                json!({ "error": "Invalid credentials" }),
            ),
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                json!({ "error": "Method not allowed" }),
            ),
            AppError::NotFound(path) => (
                StatusCode::NOT_FOUND,
                json!({ "error": "Not found", "message": path }),
            ),
            AppError::Internal(message) => {
                tracing::error!(error = %message, "Internal server error.");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Internal server error", "message": message }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
