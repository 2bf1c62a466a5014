//! Error types for Libris server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::i18n::Message;

/// Numeric error codes exposed in error bodies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    Failure = 1,
    NotAuthorized = 2,
    DbFailure = 3,
    Duplicate = 8,
    BadValue = 18,
    BadFile = 22,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Authentication failed: {0}")]
    Authentication(Message),

    #[error("Authorization failed: {0}")]
    Authorization(Message),

    #[error("Validation error: {0}")]
    Validation(Message),

    #[error("Conflict: {0}")]
    Conflict(Message),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Map a unique-constraint violation to a conflict, pass anything else through
    pub fn conflict_on_unique(err: sqlx::Error, message: Message) -> Self {
        match &err {
            sqlx::Error::Database(db) if db.is_unique_violation() => AppError::Conflict(message),
            _ => AppError::Database(err),
        }
    }
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub code: u32,
    /// Localized, human-readable message
    pub error: String,
}

/// Success response body carrying a localized confirmation
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl From<Message> for MessageResponse {
    fn from(message: Message) -> Self {
        Self {
            message: message.text().to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Authentication(msg) => (StatusCode::UNAUTHORIZED, ErrorCode::NotAuthorized, *msg),
            AppError::Authorization(msg) => (StatusCode::FORBIDDEN, ErrorCode::NotAuthorized, *msg),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, ErrorCode::BadValue, *msg),
            // Duplicates are reported as 400
            AppError::Conflict(msg) => (StatusCode::BAD_REQUEST, ErrorCode::Duplicate, *msg),
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::DbFailure, Message::DatabaseError)
            }
            AppError::Spreadsheet(msg) => {
                tracing::error!("Spreadsheet processing failed: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::BadFile, Message::UnreadableSpreadsheet)
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::Failure, Message::ServerError)
            }
        };

        let body = Json(ErrorResponse {
            code: code as u32,
            error: message.text().to_string(),
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
