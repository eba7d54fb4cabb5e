//! Error types for discovery and resolution.
//!
//! "Not found" is never an error here: resolution reports it as
//! [`Resolution::NotFound`](crate::Resolution::NotFound). Everything in this
//! module is a fault the transport layer should surface as a server error,
//! except [`ResolutionError::InvalidRoute`], which is a rejected request.

use std::io;
use std::path::PathBuf;

/// Semantic error categories shared by [`DiscoveryError`] and [`ResolutionError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum StorageErrorKind {
    /// Resource disappeared between listing and inspection.
    NotFound,
    /// Permission denied.
    PermissionDenied,
    /// Route identity is malformed or escapes the content root.
    InvalidPath,
    /// Configured traversal limit exceeded.
    LimitExceeded,
    /// Other/unknown error category.
    Other,
}

impl From<io::ErrorKind> for StorageErrorKind {
    fn from(kind: io::ErrorKind) -> Self {
        match kind {
            io::ErrorKind::NotFound => Self::NotFound,
            io::ErrorKind::PermissionDenied => Self::PermissionDenied,
            _ => Self::Other,
        }
    }
}

/// Error returned when the content tree cannot be walked.
///
/// Discovery is atomic: any of these aborts the whole walk.
#[derive(Debug, thiserror::Error)]
pub enum DiscoveryError {
    /// A directory could not be listed.
    #[error("Failed to read directory {}: {source}", .path.display())]
    ReadDir {
        /// Directory being listed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// A directory entry or index candidate could not be inspected.
    #[error("Failed to inspect {}: {source}", .path.display())]
    Inspect {
        /// Path being inspected.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The tree is deeper than the configured limit.
    #[error("Directory depth limit of {limit} exceeded at {}", .path.display())]
    DepthLimitExceeded {
        /// Configured maximum depth.
        limit: usize,
        /// First directory found beyond the limit.
        path: PathBuf,
    },
}

impl DiscoveryError {
    /// Semantic category of this error.
    #[must_use]
    pub fn kind(&self) -> StorageErrorKind {
        match self {
            Self::ReadDir { source, .. } | Self::Inspect { source, .. } => source.kind().into(),
            Self::DepthLimitExceeded { .. } => StorageErrorKind::LimitExceeded,
        }
    }
}

/// Error returned when a route identity cannot be resolved.
#[derive(Debug, thiserror::Error)]
pub enum ResolutionError {
    /// Route identity is malformed or points outside the content root.
    #[error("Invalid route: {0:?}")]
    InvalidRoute(String),
    /// Filesystem fault other than "does not exist".
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        /// Path being checked or read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

impl ResolutionError {
    /// Semantic category of this error.
    #[must_use]
    pub fn kind(&self) -> StorageErrorKind {
        match self {
            Self::InvalidRoute(_) => StorageErrorKind::InvalidPath,
            Self::Io { source, .. } => source.kind().into(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
