//! Rendered page endpoint.
//!
//! Every GET request that no other route claims is a page request: the URI
//! path is decoded, normalized into a route identity and rendered into the
//! site template.

use std::sync::Arc;

use axum::extract::State;
use axum::http::Uri;
use axum::response::Html;
use mdnav_storage::normalize_request_path;
use percent_encoding::percent_decode_str;

use crate::error::ServerError;
use crate::state::AppState;

/// Handle GET for any page path.
pub(crate) async fn get_page(
    State(state): State<Arc<AppState>>,
    uri: Uri,
) -> Result<Html<String>, ServerError> {
    let decoded = percent_decode_str(uri.path())
        .decode_utf8()
        .map_err(|_| ServerError::InvalidPath(uri.path().to_owned()))?;
    let route = normalize_request_path(&decoded);

    let page = state
        .site
        .render(route)?
        .ok_or_else(|| ServerError::PageNotFound(route.to_owned()))?;

    tracing::debug!(route = %route, source = %page.source_path.display(), "Serving page");
    Ok(Html(page.html))
}
