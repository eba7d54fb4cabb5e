//! Raw content API endpoint.
//!
//! Returns the untransformed markdown of a route for non-HTML consumers.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use mdnav_storage::Resolution;

use crate::error::ServerError;
use crate::state::AppState;

/// Content type for raw markdown responses.
const MARKDOWN_CONTENT_TYPE: &str = "text/markdown; charset=utf-8";

/// Handle GET /api/content and /api/content/ (root content).
pub(crate) async fn get_root_content(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ServerError> {
    get_content_impl("", &state)
}

/// Handle GET /api/content/{path}.
pub(crate) async fn get_content(
    Path(path): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ServerError> {
    get_content_impl(&path, &state)
}

/// Shared implementation for raw content retrieval.
fn get_content_impl(path: &str, state: &AppState) -> Result<Response, ServerError> {
    let route = path.strip_suffix('/').unwrap_or(path);

    match state.site.content(route)? {
        Resolution::Found(content) => Ok((
            [(header::CONTENT_TYPE, MARKDOWN_CONTENT_TYPE)],
            content.text,
        )
            .into_response()),
        Resolution::NotFound => Err(ServerError::ContentNotFound(route.to_owned())),
    }
}
