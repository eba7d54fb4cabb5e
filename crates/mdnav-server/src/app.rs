//! Route table.

use std::sync::Arc;

use axum::Router;
use axum::middleware::map_response;
use axum::routing::get;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::handlers::{content, navigation, pages};
use crate::middleware::security;
use crate::state::AppState;

/// Build the router over shared site state.
///
/// JSON and raw-markdown endpoints are matched first; every other GET path
/// is treated as a page route.
pub(crate) fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/navigation", get(navigation::get_routes))
        .route("/api/navigation", get(navigation::get_navigation))
        .route("/api/content", get(content::get_root_content))
        .route("/api/content/", get(content::get_root_content))
        .route("/api/content/{*path}", get(content::get_content))
        .fallback(get(pages::get_page))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(map_response(security::security_headers)),
        )
        .with_state(state)
}
