//! Centralized error handling.
//!
//! Provides a unified error type for the entire application,
//! with automatic HTTP response conversion.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::services::TokenError;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Authentication
    /// Unknown user and wrong password collapse into this one variant.
    #[error("Bad credentials")]
    BadCredentials,

    #[error("Authentication required")]
    Unauthorized,

    #[error("Invalid or expired token")]
    Token(#[from] TokenError),

    // Resource errors
    #[error("Customer not found with id {0}")]
    CustomerNotFound(i32),

    #[error("{0} already exists")]
    Conflict(String),

    // Validation
    #[error("{0}")]
    Validation(String),

    // External service errors
    #[error("Database error")]
    Database(#[from] sea_orm::DbErr),

    // Internal
    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: String,
    message: String,
}

impl AppError {
    /// Get error code for client
    fn code(&self) -> &'static str {
        match self {
            AppError::BadCredentials => "BAD_CREDENTIALS",
            AppError::Unauthorized => "UNAUTHORIZED",
            AppError::Token(TokenError::Signing(_) | TokenError::WindowOutOfRange) => {
                "INTERNAL_ERROR"
            }
            AppError::Token(_) => "INVALID_TOKEN",
            AppError::CustomerNotFound(_) => "CUSTOMER_NOT_FOUND",
            AppError::Conflict(_) => "CONFLICT",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Token(TokenError::Signing(_) | TokenError::WindowOutOfRange) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::BadCredentials | AppError::Unauthorized | AppError::Token(_) => {
                StatusCode::UNAUTHORIZED
            }
            AppError::CustomerNotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message (hides internal details)
    fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),

            // Hide details for internal/security errors
            AppError::Token(e @ (TokenError::Signing(_) | TokenError::WindowOutOfRange)) => {
                tracing::error!("Token minting failed: {:?}", e);
                "An internal error occurred".to_string()
            }
            AppError::Token(e) => {
                tracing::warn!("Token rejected: {}", e);
                "Invalid or expired token".to_string()
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "A database error occurred".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }

            _ => self.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.code().to_string(),
                message: self.user_message(),
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn conflict(entity: impl Into<String>) -> Self {
        AppError::Conflict(entity.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_and_token_errors_are_unauthorized() {
        assert_eq!(AppError::BadCredentials.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::Unauthorized.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            AppError::Token(TokenError::Expired).status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::Token(TokenError::InvalidSignature).status(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn test_not_found_and_validation_statuses() {
        assert_eq!(AppError::CustomerNotFound(7).status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::validation("name is invalid").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::conflict("User").status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_minting_failures_are_internal() {
        let err = AppError::Token(TokenError::WindowOutOfRange);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.user_message(), "An internal error occurred");
    }

    #[test]
    fn test_internal_message_is_hidden() {
        let err = AppError::internal("connection string leaked");
        assert_eq!(err.user_message(), "An internal error occurred");
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_bad_credentials_message_is_generic() {
        assert_eq!(AppError::BadCredentials.user_message(), "Bad credentials");
        assert_eq!(
            AppError::CustomerNotFound(3).user_message(),
            "Customer not found with id 3"
        );
    }
}
