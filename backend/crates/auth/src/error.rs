//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use derive_more::Display;
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Internal reason for a guard rejection
///
/// Never surfaced to the client. Every reason maps to the same generic
/// unauthorized response; the distinction exists for logging only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum RejectReason {
    /// No credential cookie on the request
    #[display("no token")]
    NoToken,
    /// Token failed verification, or carried the wrong kind
    #[display("invalid token")]
    InvalidToken,
    /// The token subject no longer exists
    #[display("user gone")]
    UserGone,
    /// Refresh slot is empty (logged out or never issued)
    #[display("revoked")]
    Revoked,
    /// Presented refresh token does not match the stored reference
    #[display("reused")]
    Reused,
}

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Email already has an account
    #[error("Email is already registered")]
    AlreadyRegistered,

    /// Unknown account or wrong password, collapsed into one message
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// A session guard rejected the request
    #[error("Authentication required")]
    Rejected(RejectReason),

    /// User row disappeared while persisting a refresh token
    #[error("User record no longer exists")]
    UserVanished,

    /// Request input failed validation
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::AlreadyRegistered => StatusCode::CONFLICT,
            AuthError::InvalidCredentials | AuthError::Rejected(_) => StatusCode::UNAUTHORIZED,
            AuthError::Validation(_) => StatusCode::BAD_REQUEST,
            AuthError::UserVanished | AuthError::Database(_) | AuthError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::AlreadyRegistered => ErrorKind::Conflict,
            AuthError::InvalidCredentials | AuthError::Rejected(_) => ErrorKind::Unauthorized,
            AuthError::Validation(_) => ErrorKind::BadRequest,
            AuthError::UserVanished | AuthError::Database(_) | AuthError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    ///
    /// Server-side failures collapse to a generic message in the
    /// response body. The detail stays in the logs.
    pub fn to_app_error(&self) -> AppError {
        let kind = self.kind();
        if kind.is_server_error() {
            AppError::new(kind, "Internal server error")
        } else {
            AppError::new(kind, self.to_string())
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::UserVanished => {
                tracing::error!("User row vanished while persisting refresh token");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::Rejected(reason) => {
                tracing::warn!(reason = %reason, "Session guard rejected request");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        AuthError::Internal(err.to_string())
    }
}
