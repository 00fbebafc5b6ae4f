//! # Book API Errors
//!
//! Only produced in strict mode. Compatible mode answers every request with
//! 200 and never constructs these.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Result type for book handlers
pub type BookResult<T> = Result<T, BookError>;

/// Book API errors
#[derive(Debug, Clone, Error)]
pub enum BookError {
    /// No book with the requested id
    #[error("Book not found: {0}")]
    NotFound(String),

    /// Request body could not be decoded as a book
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
}

impl BookError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            BookError::NotFound(_) => StatusCode::NOT_FOUND,
            BookError::InvalidBody(_) => StatusCode::BAD_REQUEST,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<BookError> for ErrorResponse {
    fn from(err: BookError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for BookError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}
