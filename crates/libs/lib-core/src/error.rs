//! # Centralized Error Handling
//!
//! This module defines the gateway-wide error type [`AppError`] and is the single
//! place where failures are turned into HTTP responses. Handlers never write their
//! own error bodies; they return `Err(AppError)` and axum calls
//! [`IntoResponse::into_response`] on it.
//!
//! ## Error Categories
//!
//! 1. **Application errors** - the database procedure reported a business failure
//!    - [`Application`](AppError::Application) → its own `result_code` (always >= 400)
//!
//! 2. **Client errors** (4xx) - the request could not be read at all
//!    - [`InvalidInput`](AppError::InvalidInput) → 400 Bad Request
//!    - [`NotFound`](AppError::NotFound) → 404 Not Found
//!
//! 3. **Server errors** (5xx) - the round trip or the gateway itself failed
//!    - [`Transport`](AppError::Transport) → 500 Internal Server Error
//!    - [`Config`](AppError::Config) → 500 Internal Server Error
//!    - [`Internal`](AppError::Internal) → 500 Internal Server Error
//!
//! ## Wire Format
//!
//! Every failure is written as:
//!
//! ```text
//! { "error": "<message>" }
//! ```
//!
//! For application errors the message is the `result_message` the database chose
//! to expose. For server errors the message is always [`GENERIC_ERROR_MESSAGE`];
//! the detail only goes to the logs.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message sent to clients whenever no approved message is available.
pub const GENERIC_ERROR_MESSAGE: &str = "Internal server error";

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Gateway-wide error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// The procedure ran and reported a business failure (`result_code >= 400`).
    ///
    /// **HTTP Status**: `code`, verbatim
    #[error("Application error {code}: {message}")]
    Application { code: i32, message: String },

    /// The database round trip could not be completed (pool exhaustion,
    /// connection drop, malformed call, timeout, undecodable row).
    ///
    /// **HTTP Status**: 500 Internal Server Error
    #[error("Transport error: {0}")]
    Transport(String),

    /// The request could not be read (e.g. body is not JSON).
    ///
    /// **HTTP Status**: 400 Bad Request
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No route matched the request.
    ///
    /// **HTTP Status**: 404 Not Found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Configuration error during startup or environment loading.
    ///
    /// **HTTP Status**: 500 Internal Server Error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal server error (unexpected failures).
    ///
    /// **HTTP Status**: 500 Internal Server Error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// The only error body ever sent to a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl AppError {
    /// Get the HTTP status code for this error.
    ///
    /// An application code that is not a valid HTTP status falls back to 500.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Application { code, .. } => u16::try_from(*code)
                .ok()
                .and_then(|code| StatusCode::from_u16(code).ok())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Transport(_) | AppError::Config(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the client-visible message.
    ///
    /// Server-side failures never expose their detail.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Application { message, .. } if !message.is_empty() => message.clone(),
            AppError::Application { .. } => GENERIC_ERROR_MESSAGE.to_string(),
            AppError::InvalidInput(msg) | AppError::NotFound(msg) => msg.clone(),
            AppError::Transport(_) | AppError::Config(_) | AppError::Internal(_) => {
                GENERIC_ERROR_MESSAGE.to_string()
            }
        }
    }

    /// Split into the status and body written to the wire.
    pub fn translate(&self) -> (StatusCode, ErrorBody) {
        (
            self.status_code(),
            ErrorBody {
                error: self.user_message(),
            },
        )
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = self.translate();

        // Full detail goes to the server logs only
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), "Server error: {:?}", self);
        } else {
            tracing::warn!(status = status.as_u16(), "Client error: {}", self);
        }

        (status, Json(body)).into_response()
    }
}

/// Convert `anyhow::Error` to `AppError`.
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

/// Convert `sqlx::Error` to `AppError`.
///
/// Every database-side failure is a transport failure from the gateway's point
/// of view; business failures arrive as rows, not as errors.
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut => {
                AppError::Transport("timed out waiting for a pooled connection".to_string())
            }
            sqlx::Error::RowNotFound => {
                AppError::Transport("api.call returned no row".to_string())
            }
            sqlx::Error::Database(db_err) => {
                AppError::Transport(format!("database error: {}", db_err.message()))
            }
            _ => AppError::Transport(format!("database error: {}", err)),
        }
    }
}

/// Convert `serde_json::Error` to `AppError`.
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Internal(format!("JSON error: {}", err))
    }
}

// endregion: --- Tests
