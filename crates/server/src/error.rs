//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures server errors to Sentry
//! before responding to the client. All fallible route handlers return
//! `Result<T, AppError>`; the `IntoResponse` impl is the single place request
//! failures become HTTP responses, replacing per-handler error plumbing.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::db::RepositoryError;
use crate::services::ReportError;

/// Application-level error type for the server.
#[derive(Debug, Error)]
pub enum AppError {
    /// Store operation failed.
    #[error("Database error: {0}")]
    Database(#[from] RepositoryError),

    /// Report generation failed.
    #[error("Report error: {0}")]
    Report(#[from] ReportError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Whether this error is a server-side failure worth capturing.
    const fn is_server_error(&self) -> bool {
        matches!(
            self,
            Self::Database(_)
                | Self::Internal(_)
                | Self::Report(ReportError::Io(_) | ReportError::Render(_))
        )
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry; full detail stays server-side.
        if self.is_server_error() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = match &self {
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Report(err) => match err {
                ReportError::TemplateMissing { .. } | ReportError::InvalidFilename(_) => {
                    StatusCode::BAD_REQUEST
                }
                ReportError::Render(_) | ReportError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Database(_) => "Database connection failed".to_string(),
            Self::Internal(_) => "Internal server error".to_string(),
            Self::Report(err) => match err {
                // The specific message is the point: it names the missing file.
                ReportError::TemplateMissing { .. } | ReportError::InvalidFilename(_) => {
                    err.to_string()
                }
                ReportError::Render(_) | ReportError::Io(_) => {
                    "Internal server error".to_string()
                }
            },
            Self::NotFound(msg) | Self::BadRequest(msg) => msg.clone(),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn get_status(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound("Contact not found".to_string());
        assert_eq!(err.to_string(), "Not found: Contact not found");

        let err = AppError::BadRequest("invalid input".to_string());
        assert_eq!(err.to_string(), "Bad request: invalid input");
    }

    #[test]
    fn test_app_error_status_codes() {
        assert_eq!(
            get_status(AppError::NotFound("test".to_string())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(AppError::BadRequest("test".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::Internal("test".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            get_status(AppError::Database(RepositoryError::Database(
                sqlx::Error::PoolClosed
            ))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_missing_template_is_bad_request_with_path() {
        let err = AppError::Report(ReportError::TemplateMissing {
            path: PathBuf::from("templates/neon_template.html"),
        });
        assert_eq!(
            err.to_string(),
            "Report error: Template file not found: templates/neon_template.html"
        );
        assert_eq!(get_status(err), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_render_failure_is_internal() {
        let err = AppError::Report(ReportError::Io(std::io::Error::other("disk full")));
        assert_eq!(get_status(err), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
