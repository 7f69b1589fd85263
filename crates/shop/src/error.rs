//! Unified error handling for the shop server.
//!
//! Provides a unified `AppError` type that maps every failure the API can
//! surface to a status code and a JSON body. All route handlers return
//! `Result<T, AppError>`; no error kind is swallowed into a generic message.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::store::StoreError;

/// Application-level error type for the shop server.
#[derive(Debug, Error)]
pub enum AppError {
    /// A store operation failed (taken username, missing product, ...).
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Login attempt with a wrong username or password.
    #[error("invalid username or password")]
    InvalidCredentials,

    /// The request needs a logged-in session.
    #[error("login required")]
    NotAuthenticated,

    /// The logged-in role may not manage the catalog.
    #[error("admin access required")]
    NotAdmin,

    /// Receipt requested without a pending checkout.
    #[error("no receipt available")]
    NoReceiptAvailable,

    /// Session store operation failed.
    #[error("session error: {0}")]
    Session(#[from] tower_sessions::session::Error),
}

/// JSON error body returned to clients.
#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    message: String,
}

impl AppError {
    /// Stable machine-readable error kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Store(err) => match err {
                StoreError::UsernameTaken(_) => "username_taken",
                StoreError::ProductNotFound(_) => "product_not_found",
                StoreError::CategoryNotFound(_) => "category_not_found",
                StoreError::CategoryTaken(_) => "category_taken",
                StoreError::CredentialHash => "internal",
            },
            Self::InvalidCredentials => "invalid_credentials",
            Self::NotAuthenticated => "not_authenticated",
            Self::NotAdmin => "not_admin",
            Self::NoReceiptAvailable => "no_receipt_available",
            Self::Session(_) => "internal",
        }
    }

    /// HTTP status code for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Store(err) => match err {
                StoreError::UsernameTaken(_) | StoreError::CategoryTaken(_) => {
                    StatusCode::CONFLICT
                }
                StoreError::ProductNotFound(_) | StoreError::CategoryNotFound(_) => {
                    StatusCode::NOT_FOUND
                }
                StoreError::CredentialHash => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::InvalidCredentials | Self::NotAuthenticated => StatusCode::UNAUTHORIZED,
            Self::NotAdmin => StatusCode::FORBIDDEN,
            Self::NoReceiptAvailable => StatusCode::NOT_FOUND,
            Self::Session(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(error = %self, "request error");
        }

        // Don't expose internal error details to clients
        let message = if status.is_server_error() {
            "internal server error".to_string()
        } else {
            self.to_string()
        };

        (
            status,
            Json(ErrorBody {
                error: self.kind(),
                message,
            }),
        )
            .into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
