//! Mock storage for testing.
//!
//! Holds routes and content in memory so that consumers of [`Storage`] can be
//! tested without touching the filesystem. Failures can be injected to
//! exercise error paths.

use std::collections::HashMap;
use std::io;
use std::path::PathBuf;

use crate::error::{DiscoveryError, ResolutionError};
use crate::path::split_route;
use crate::storage::{Content, Resolution, Storage};

/// In-memory storage implementation.
///
/// # Example
///
/// ```
/// use mdnav_storage::{MockStorage, Resolution, Storage};
///
/// let storage = MockStorage::new()
///     .with_content("", "# Home")
///     .with_content("guide", "# Guide");
///
/// assert_eq!(storage.routes().unwrap(), vec!["guide"]);
/// assert!(matches!(storage.resolve("guide").unwrap(), Resolution::Found(_)));
/// ```
#[derive(Debug, Default)]
pub struct MockStorage {
    /// Route identities in insertion order (root excluded).
    routes: Vec<String>,
    /// Content by route identity.
    contents: HashMap<String, String>,
    /// Fail discovery with this error kind.
    discovery_failure: Option<io::ErrorKind>,
    /// Fail resolution of these routes with the given error kind.
    resolution_failures: HashMap<String, io::ErrorKind>,
}

impl MockStorage {
    /// Create an empty mock storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add content for a route. Non-root routes are listed in insertion order.
    #[must_use]
    pub fn with_content(mut self, route: &str, text: &str) -> Self {
        if !route.is_empty() && !self.contents.contains_key(route) {
            self.routes.push(route.to_owned());
        }
        self.contents.insert(route.to_owned(), text.to_owned());
        self
    }

    /// Make `routes()` fail.
    #[must_use]
    pub fn with_discovery_failure(mut self, kind: io::ErrorKind) -> Self {
        self.discovery_failure = Some(kind);
        self
    }

    /// Make `resolve(route)` fail.
    #[must_use]
    pub fn with_resolution_failure(mut self, route: &str, kind: io::ErrorKind) -> Self {
        self.resolution_failures.insert(route.to_owned(), kind);
        self
    }

    fn mock_path(route: &str) -> PathBuf {
        PathBuf::from("mock").join(route).join("index.md")
    }
}

impl Storage for MockStorage {
    fn routes(&self) -> Result<Vec<String>, DiscoveryError> {
        if let Some(kind) = self.discovery_failure {
            return Err(DiscoveryError::ReadDir {
                path: PathBuf::from("mock"),
                source: io::Error::from(kind),
            });
        }
        Ok(self.routes.clone())
    }

    fn resolve(&self, route: &str) -> Result<Resolution, ResolutionError> {
        if split_route(route).is_none() {
            return Err(ResolutionError::InvalidRoute(route.to_owned()));
        }
        if let Some(kind) = self.resolution_failures.get(route) {
            return Err(ResolutionError::io(Self::mock_path(route), io::Error::from(*kind)));
        }

        Ok(self
            .contents
            .get(route)
            .map_or(Resolution::NotFound, |text| {
                Resolution::Found(Content {
                    route: route.to_owned(),
                    path: Self::mock_path(route),
                    text: text.clone(),
                })
            }))
    }
}
