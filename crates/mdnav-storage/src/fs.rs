//! Filesystem storage implementation.
//!
//! Provides [`FsStorage`] for discovering and resolving routes from a local
//! content directory. Every call goes to the filesystem; nothing is cached.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{DiscoveryError, ResolutionError};
use crate::path::split_route;
use crate::scanner::Scanner;
use crate::storage::{Content, Resolution, Storage};

/// Default index document filename.
pub const DEFAULT_INDEX_FILE: &str = "index.md";

/// Filesystem storage implementation.
///
/// # Example
///
/// ```no_run
/// use mdnav_storage::{FsStorage, Storage};
///
/// let storage = FsStorage::new("content").with_max_depth(Some(16));
/// let routes = storage.routes()?;
/// # Ok::<(), mdnav_storage::DiscoveryError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FsStorage {
    /// Content root.
    root: PathBuf,
    /// Filename that makes a directory addressable.
    index_file: String,
    /// Deepest directory level discovery may descend to.
    max_depth: Option<usize>,
}

impl FsStorage {
    /// Create a new filesystem storage using `index.md` as the index document.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            index_file: DEFAULT_INDEX_FILE.to_owned(),
            max_depth: None,
        }
    }

    /// Use a different index document filename.
    #[must_use]
    pub fn with_index_file(mut self, index_file: impl Into<String>) -> Self {
        self.index_file = index_file.into();
        self
    }

    /// Limit how deep discovery may descend (`None` for unlimited).
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Locate the index document for `route`, confined to the content root.
    ///
    /// Returns `Ok(None)` when nothing exists at that location or when a
    /// route segment is a symlink, so that only directories discovery would
    /// list can resolve. The returned path is canonical and verified to be a
    /// descendant of the canonical content root.
    fn locate_index(&self, route: &str) -> Result<Option<PathBuf>, ResolutionError> {
        let segments =
            split_route(route).ok_or_else(|| ResolutionError::InvalidRoute(route.to_owned()))?;

        let Some(root) = canonicalize_existing(&self.root)? else {
            return Ok(None);
        };

        let mut dir = root.clone();
        for segment in segments {
            dir.push(segment);
            if !is_plain_directory(&dir)? {
                return Ok(None);
            }
        }

        let Some(canonical) = canonicalize_existing(&dir.join(&self.index_file))? else {
            return Ok(None);
        };

        if !canonical.starts_with(&root) {
            tracing::warn!(route = %route, target = %canonical.display(), "Route escapes content root");
            return Err(ResolutionError::InvalidRoute(route.to_owned()));
        }

        Ok(Some(canonical))
    }
}

impl Storage for FsStorage {
    fn routes(&self) -> Result<Vec<String>, DiscoveryError> {
        let routes = Scanner::new(&self.index_file, self.max_depth).scan(&self.root)?;
        tracing::debug!(root = %self.root.display(), count = routes.len(), "Discovered routes");
        Ok(routes)
    }

    fn resolve(&self, route: &str) -> Result<Resolution, ResolutionError> {
        let Some(path) = self.locate_index(route)? else {
            tracing::debug!(route = %route, "No index document");
            return Ok(Resolution::NotFound);
        };

        let meta = fs::metadata(&path).map_err(|e| ResolutionError::io(&path, e))?;
        if !meta.is_file() {
            return Ok(Resolution::NotFound);
        }

        let text = fs::read_to_string(&path).map_err(|e| ResolutionError::io(&path, e))?;

        Ok(Resolution::Found(Content {
            route: route.to_owned(),
            path,
            text,
        }))
    }
}

/// Whether `path` is a real directory, not a symlink to one.
fn is_plain_directory(path: &Path) -> Result<bool, ResolutionError> {
    match fs::symlink_metadata(path) {
        Ok(meta) => Ok(meta.is_dir()),
        Err(e) if matches!(e.kind(), io::ErrorKind::NotFound | io::ErrorKind::NotADirectory) => {
            Ok(false)
        }
        Err(e) => Err(ResolutionError::io(path, e)),
    }
}

/// Canonicalize a path, mapping "does not exist" to `None`.
///
/// A plain file in the middle of the path (`NotADirectory`) also counts as
/// missing.
fn canonicalize_existing(path: &Path) -> Result<Option<PathBuf>, ResolutionError> {
    match fs::canonicalize(path) {
        Ok(p) => Ok(Some(p)),
        Err(e) if matches!(e.kind(), io::ErrorKind::NotFound | io::ErrorKind::NotADirectory) => {
            Ok(None)
        }
        Err(e) => Err(ResolutionError::io(path, e)),
    }
}
