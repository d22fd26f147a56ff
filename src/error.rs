//! Error types shared across the crate.
//!
//! - [`AppError`] - service-level failures, rendered as JSON over HTTP
//! - [`RouteConfigError`] - a route table that violates its construction invariants
//! - [`NavigationError`] - failures while following redirects to a terminal decision

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{message}")]
    Unauthorized { message: String, details: Value },
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn unauthorized(message: impl Into<String>, details: Value) -> Self {
        Self::Unauthorized {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Returns `true` for [`AppError::Unauthorized`].
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self {
            AppError::Unauthorized { message, details } => {
                (StatusCode::UNAUTHORIZED, "unauthorized", message, details)
            }
            AppError::Internal { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                message,
                details,
            ),
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// A route table rejected at construction time.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteConfigError {
    #[error("route table must contain exactly one root entry, found {0}")]
    RootCount(usize),

    #[error("root entry must be a redirect")]
    RootNotRedirect,

    #[error("duplicate route path `{0}`")]
    DuplicatePath(String),

    #[error("redirect from `{from}` targets unknown path `{to}`")]
    UnknownRedirectTarget { from: String, to: String },

    #[error("redirect entry `{path}` cannot carry guards")]
    GuardedRedirect { path: String },

    #[error("redirect limit must be at least 1")]
    ZeroRedirectLimit,
}

/// Navigation stopped before reaching a terminal decision.
#[derive(Debug, Error)]
pub enum NavigationError {
    #[error("navigation to `{path}` exceeded {limit} redirects")]
    RedirectLimit { path: String, limit: usize },

    #[error(transparent)]
    Guard(#[from] AppError),
}

impl From<NavigationError> for AppError {
    fn from(err: NavigationError) -> Self {
        match err {
            NavigationError::Guard(inner) => inner,
            NavigationError::RedirectLimit { path, limit } => AppError::internal(
                "Redirect limit exceeded",
                serde_json::json!({ "path": path, "limit": limit }),
            ),
        }
    }
}
