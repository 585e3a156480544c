//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::models::validation::ValidationError;

/// Application-wide error type.
///
/// # Error Categories
///
/// - **Validation Errors**: malformed or missing input, rejected before any
///   database call
/// - **Database Errors**: any sqlx::Error from the persistence layer
/// - **Resource Errors**: requested account does not exist
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Request body, path or query parameters are invalid.
    ///
    /// Returns HTTP 422 Unprocessable Entity with field-level details.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Database operation failed (connection error, query error).
    ///
    /// Returns HTTP 500. Details are logged, never sent to the client.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Requested account does not exist.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("Account not found")]
    AccountNotFound,
}

/// Convert AppError into an HTTP response.
///
/// # Response Format
///
/// ```json
/// {
///   "error": {
///     "code": "validation_error",
///     "message": "Validation failed: user_id: field required",
///     "details": [{ "field": "user_id", "message": "field required" }]
///   }
/// }
/// ```
///
/// `details` is only present for validation errors.
///
/// # Status Code Mapping
///
/// - `Validation` → 422 Unprocessable Entity
/// - `AccountNotFound` → 404 Not Found
/// - `Database` → 500 Internal Server Error (hides details from client)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Validation(err) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({
                    "error": {
                        "code": "validation_error",
                        "message": self.to_string(),
                        "details": err.errors(),
                    }
                }),
            ),
            AppError::AccountNotFound => (
                StatusCode::NOT_FOUND,
                json!({
                    "error": {
                        "code": "account_not_found",
                        "message": self.to_string(),
                    }
                }),
            ),
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": {
                            "code": "internal_error",
                            "message": "An internal error occurred",
                        }
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
