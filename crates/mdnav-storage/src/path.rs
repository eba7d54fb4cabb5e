//! Route identity normalization.
//!
//! Route identities are the only path form that crosses crate boundaries.
//! Request paths from the transport layer are normalized here, and route
//! identities are split here before anything is joined onto the content root.

/// Convert an inbound request path into a route identity.
///
/// Strips exactly one leading slash and at most one trailing slash. No other
/// normalization is performed (`.`/`..`, repeated slashes and case are left
/// as-is; [`split_route`] rejects the unsafe ones).
///
/// - `/` -> `""`
/// - `/guide` -> `"guide"`
/// - `/guide/setup/` -> `"guide/setup"`
#[must_use]
pub fn normalize_request_path(path: &str) -> &str {
    let path = path.strip_prefix('/').unwrap_or(path);
    path.strip_suffix('/').unwrap_or(path)
}

/// Join a route prefix and a single segment.
///
/// Never introduces an empty segment: an empty prefix yields the segment alone.
#[must_use]
pub fn join_route(prefix: &str, segment: &str) -> String {
    if prefix.is_empty() {
        segment.to_owned()
    } else {
        format!("{prefix}/{segment}")
    }
}

/// Split a route identity into segments that are safe to join onto the
/// content root.
///
/// Returns `None` if any segment is empty, `.` or `..`, or contains a
/// backslash or NUL byte. The root identity `""` has no segments.
#[must_use]
pub fn split_route(route: &str) -> Option<Vec<&str>> {
    if route.is_empty() {
        return Some(Vec::new());
    }

    route
        .split('/')
        .map(|segment| is_safe_segment(segment).then_some(segment))
        .collect()
}

fn is_safe_segment(segment: &str) -> bool {
    !segment.is_empty()
        && segment != "."
        && segment != ".."
        && !segment.contains(['\\', '\0'])
}
