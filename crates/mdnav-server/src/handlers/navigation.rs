//! Navigation API endpoints.
//!
//! `/navigation` returns the flat list of discovered routes; `/api/navigation`
//! returns the same routes folded into a tree. Both walk the content tree on
//! every request.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use mdnav_site::NavItem;
use serde::Serialize;

use crate::error::ServerError;
use crate::state::AppState;

/// Response for GET /api/navigation.
#[derive(Serialize)]
pub(crate) struct NavigationResponse {
    /// Navigation tree items.
    items: Vec<NavItem>,
}

/// Handle GET /navigation.
pub(crate) async fn get_routes(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<String>>, ServerError> {
    let routes = state.site.routes()?;
    Ok(Json(routes))
}

/// Handle GET /api/navigation.
pub(crate) async fn get_navigation(
    State(state): State<Arc<AppState>>,
) -> Result<Json<NavigationResponse>, ServerError> {
    let items = state.site.navigation()?;
    Ok(Json(NavigationResponse { items }))
}
