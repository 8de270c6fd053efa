//! Event domain error types

use axum_helpers::AppError;
use thiserror::Error;

/// Result type for event operations
pub type Result<T> = std::result::Result<T, EventError>;

/// Event domain errors
#[derive(Debug, Error)]
pub enum EventError {
    /// Event not found
    #[error("Event not found: {id}")]
    NotFound { id: String },

    /// Validation error
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// MongoDB driver error
    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    /// BSON conversion error
    #[error("BSON error: {message}")]
    Bson { message: String },
}

impl EventError {
    pub fn not_found(id: impl ToString) -> Self {
        Self::NotFound {
            id: id.to_string(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

impl From<mongodb::bson::ser::Error> for EventError {
    fn from(err: mongodb::bson::ser::Error) -> Self {
        Self::Bson {
            message: err.to_string(),
        }
    }
}

impl From<mongodb::bson::de::Error> for EventError {
    fn from(err: mongodb::bson::de::Error) -> Self {
        Self::Bson {
            message: err.to_string(),
        }
    }
}

impl From<validator::ValidationErrors> for EventError {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::Validation {
            message: err.to_string(),
        }
    }
}

// Convert to axum_helpers::AppError for HTTP responses
impl From<EventError> for AppError {
    fn from(err: EventError) -> Self {
        match err {
            EventError::NotFound { id } => AppError::NotFound(format!("Event not found: {}", id)),
            EventError::Validation { message } => AppError::BadRequest(message),
            EventError::Database(e) => AppError::Database(e),
            EventError::Bson { message } => AppError::InternalServerError(message),
        }
    }
}

impl axum::response::IntoResponse for EventError {
    fn into_response(self) -> axum::response::Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
