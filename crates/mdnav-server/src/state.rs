//! Application state.
//!
//! Shared, read-only state for all request handlers.

use mdnav_site::Site;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Site for routes, navigation, raw content and rendered pages.
    pub(crate) site: Site,
}
