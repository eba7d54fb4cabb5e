//! Error types for the HTTP server.
//!
//! Maps core outcomes to status codes: missing content is a `404`, rejected
//! route identities are a `400`, and every filesystem or template fault is a
//! `500`. Response bodies are plain text except for navigation endpoints,
//! which answer in JSON.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use mdnav_site::{RenderError, TemplateError};
use mdnav_storage::{DiscoveryError, ResolutionError};
use serde_json::json;

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ServerError {
    /// No page answers this route.
    #[error("Page not found: {0}")]
    PageNotFound(String),

    /// No raw content answers this route.
    #[error("Content not found: {0}")]
    ContentNotFound(String),

    /// Request path is not a valid route identity.
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// Content tree could not be walked.
    #[error(transparent)]
    Discovery(#[from] DiscoveryError),

    /// Content could not be read.
    #[error(transparent)]
    Resolution(ResolutionError),

    /// Template could not be read.
    #[error(transparent)]
    Template(#[from] TemplateError),
}

impl From<ResolutionError> for ServerError {
    fn from(err: ResolutionError) -> Self {
        match err {
            ResolutionError::InvalidRoute(route) => Self::InvalidPath(route),
            err @ ResolutionError::Io { .. } => Self::Resolution(err),
        }
    }
}

impl From<RenderError> for ServerError {
    fn from(err: RenderError) -> Self {
        match err {
            RenderError::Resolution(e) => e.into(),
            RenderError::Template(e) => Self::Template(e),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        match &self {
            Self::PageNotFound(_) => (StatusCode::NOT_FOUND, "Page not found").into_response(),
            Self::ContentNotFound(_) => {
                (StatusCode::NOT_FOUND, "Content not found").into_response()
            }
            Self::InvalidPath(path) => {
                tracing::debug!(path = %path, "Rejected request path");
                (StatusCode::BAD_REQUEST, "Invalid path").into_response()
            }
            Self::Discovery(e) => {
                tracing::error!(error = %e, kind = ?e.kind(), "Route discovery failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"error": "Failed to read navigation"})),
                )
                    .into_response()
            }
            Self::Resolution(e) => {
                tracing::error!(error = %e, kind = ?e.kind(), "Content resolution failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
            Self::Template(e) => {
                tracing::error!(error = %e, "Template unavailable");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error: Template file not found",
                )
                    .into_response()
            }
        }
    }
}
