//! Storage trait and resolution types.

use std::path::PathBuf;

use crate::error::{DiscoveryError, ResolutionError};

/// Raw markdown for a resolved route.
///
/// Read fresh on every resolution; nothing holds on to it past the request
/// that asked for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Content {
    /// Route identity that was resolved.
    pub route: String,
    /// Source location of the index document (backend-specific).
    pub path: PathBuf,
    /// Untransformed markdown text.
    pub text: String,
}

/// Outcome of resolving a route identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The route has an index document.
    Found(Content),
    /// Nothing answers this route. A normal outcome, not a fault.
    NotFound,
}

impl Resolution {
    /// Returns the content if found.
    #[must_use]
    pub fn found(self) -> Option<Content> {
        match self {
            Self::Found(content) => Some(content),
            Self::NotFound => None,
        }
    }
}

/// Storage backend for route discovery and content resolution.
///
/// Implementations must be thread-safe; the server shares a single instance
/// across all requests.
pub trait Storage: Send + Sync {
    /// List route identities of every directory below the root that holds an
    /// index document, in depth-first traversal order.
    ///
    /// The root itself is never listed; it is addressed by `""`.
    ///
    /// # Errors
    ///
    /// Returns [`DiscoveryError`] if any part of the tree cannot be read.
    /// No partial results are returned.
    fn routes(&self) -> Result<Vec<String>, DiscoveryError>;

    /// Resolve a route identity to its index document.
    ///
    /// # Errors
    ///
    /// Returns [`ResolutionError`] for invalid identities and for filesystem
    /// faults other than "does not exist".
    fn resolve(&self, route: &str) -> Result<Resolution, ResolutionError>;
}
