//! Route discovery by filesystem walking.
//!
//! The Scanner only identifies which directories hold an index document. It
//! never reads document content; that is left to resolution.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::DiscoveryError;
use crate::path::join_route;

/// Discovers route identities by walking the content tree.
///
/// The walk is depth-first over directories only, in the order the
/// filesystem lists them:
/// 1. For each child directory, record its route if it holds the index file
/// 2. Recurse into it whether or not it had one
///
/// Symlinked directories are not followed.
pub(crate) struct Scanner<'a> {
    index_file: &'a str,
    max_depth: Option<usize>,
}

impl<'a> Scanner<'a> {
    /// Create a new Scanner.
    ///
    /// # Arguments
    ///
    /// * `index_file` - Name of the index document (e.g., "index.md")
    /// * `max_depth` - Deepest directory level allowed below the root
    pub(crate) fn new(index_file: &'a str, max_depth: Option<usize>) -> Self {
        Self {
            index_file,
            max_depth,
        }
    }

    /// Walk `root` and return route identities.
    pub(crate) fn scan(&self, root: &Path) -> Result<Vec<String>, DiscoveryError> {
        let mut routes = Vec::new();
        self.scan_directory(root, "", 1, &mut routes)?;
        Ok(routes)
    }

    /// Scan one directory level. `depth` is the depth of its children.
    fn scan_directory(
        &self,
        dir_path: &Path,
        route_prefix: &str,
        depth: usize,
        routes: &mut Vec<String>,
    ) -> Result<(), DiscoveryError> {
        let entries = fs::read_dir(dir_path).map_err(|source| DiscoveryError::ReadDir {
            path: dir_path.to_path_buf(),
            source,
        })?;

        for entry in entries {
            let entry = entry.map_err(|source| DiscoveryError::ReadDir {
                path: dir_path.to_path_buf(),
                source,
            })?;
            let path = entry.path();

            let file_type = entry
                .file_type()
                .map_err(|source| DiscoveryError::Inspect {
                    path: path.clone(),
                    source,
                })?;
            if !file_type.is_dir() {
                continue;
            }

            if let Some(limit) = self.max_depth
                && depth > limit
            {
                return Err(DiscoveryError::DepthLimitExceeded { limit, path });
            }

            // A name that is not UTF-8 cannot be addressed by any route
            let Ok(child_name) = entry.file_name().into_string() else {
                tracing::warn!(path = %path.display(), "Skipping directory with non-UTF-8 name");
                continue;
            };
            let child_route = join_route(route_prefix, &child_name);

            if self.has_index(&path)? {
                tracing::trace!(route = %child_route, "Discovered route");
                routes.push(child_route.clone());
            }

            self.scan_directory(&path, &child_route, depth + 1, routes)?;
        }

        Ok(())
    }

    /// Check whether `dir` holds the index document as a regular file.
    fn has_index(&self, dir: &Path) -> Result<bool, DiscoveryError> {
        let index_path = dir.join(self.index_file);
        match fs::metadata(&index_path) {
            Ok(meta) => Ok(meta.is_file()),
            Err(e) if matches!(e.kind(), io::ErrorKind::NotFound | io::ErrorKind::NotADirectory) => {
                Ok(false)
            }
            Err(source) => Err(DiscoveryError::Inspect {
                path: index_path,
                source,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn create_test_dir() -> tempfile::TempDir {
        tempfile::tempdir().unwrap()
    }

    fn write_index(dir: &Path, content: &str) {
        fs::create_dir_all(dir).unwrap();
        fs::write(dir.join("index.md"), content).unwrap();
    }

    #[test]
    fn test_scan_empty_dir() {
        let temp_dir = create_test_dir();

        let routes = Scanner::new("index.md", None).scan(temp_dir.path()).unwrap();

        assert!(routes.is_empty());
    }

    #[test]
    fn test_scan_excludes_root_index() {
        let temp_dir = create_test_dir();
        fs::write(temp_dir.path().join("index.md"), "# Root").unwrap();

        let routes = Scanner::new("index.md", None).scan(temp_dir.path()).unwrap();

        assert!(routes.is_empty());
    }

    #[test]
    fn test_scan_nested_structure() {
        let temp_dir = create_test_dir();
        fs::write(temp_dir.path().join("index.md"), "# Root").unwrap();
        write_index(&temp_dir.path().join("x"), "# X");
        write_index(&temp_dir.path().join("x/y"), "# Y");

        let routes = Scanner::new("index.md", None).scan(temp_dir.path()).unwrap();

        assert_eq!(routes, vec!["x".to_owned(), "x/y".to_owned()]);
    }

    #[test]
    fn test_scan_recurses_through_directories_without_index() {
        let temp_dir = create_test_dir();
        fs::create_dir(temp_dir.path().join("a")).unwrap();
        write_index(&temp_dir.path().join("a/b"), "# B");

        let routes = Scanner::new("index.md", None).scan(temp_dir.path()).unwrap();

        assert_eq!(routes, vec!["a/b".to_owned()]);
    }

    #[test]
    fn test_scan_parent_precedes_descendants() {
        let temp_dir = create_test_dir();
        write_index(&temp_dir.path().join("a"), "# A");
        write_index(&temp_dir.path().join("a/b"), "# B");
        write_index(&temp_dir.path().join("a/b/c"), "# C");

        let routes = Scanner::new("index.md", None).scan(temp_dir.path()).unwrap();

        assert_eq!(routes, vec!["a", "a/b", "a/b/c"]);
    }

    #[test]
    fn test_scan_ignores_plain_files() {
        let temp_dir = create_test_dir();
        fs::write(temp_dir.path().join("guide.md"), "# Guide").unwrap();
        fs::write(temp_dir.path().join("notes.txt"), "notes").unwrap();

        let routes = Scanner::new("index.md", None).scan(temp_dir.path()).unwrap();

        assert!(routes.is_empty());
    }

    #[test]
    fn test_scan_index_must_be_a_file() {
        let temp_dir = create_test_dir();
        fs::create_dir_all(temp_dir.path().join("a/index.md")).unwrap();

        let routes = Scanner::new("index.md", None).scan(temp_dir.path()).unwrap();

        // "a/index.md" is itself a directory without an index document
        assert!(routes.is_empty());
    }

    #[test]
    fn test_scan_includes_hidden_directories() {
        let temp_dir = create_test_dir();
        write_index(&temp_dir.path().join(".drafts"), "# Drafts");

        let routes = Scanner::new("index.md", None).scan(temp_dir.path()).unwrap();

        assert_eq!(routes, vec![".drafts"]);
    }

    #[test]
    fn test_scan_with_custom_index_file() {
        let temp_dir = create_test_dir();
        let dir = temp_dir.path().join("domain");
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("README.md"), "# Domain").unwrap();
        write_index(&temp_dir.path().join("other"), "# Other");

        let routes = Scanner::new("README.md", None).scan(temp_dir.path()).unwrap();

        assert_eq!(routes, vec!["domain"]);
    }

    #[test]
    fn test_scan_missing_root_fails() {
        let err = Scanner::new("index.md", None)
            .scan(Path::new("/nonexistent/mdnav-content"))
            .unwrap_err();

        assert!(matches!(err, DiscoveryError::ReadDir { .. }));
    }

    #[test]
    fn test_scan_depth_limit() {
        let temp_dir = create_test_dir();
        write_index(&temp_dir.path().join("a/b/c"), "# C");

        let routes = Scanner::new("index.md", Some(3)).scan(temp_dir.path()).unwrap();
        assert_eq!(routes, vec!["a/b/c"]);

        let err = Scanner::new("index.md", Some(2))
            .scan(temp_dir.path())
            .unwrap_err();
        assert!(
            matches!(err, DiscoveryError::DepthLimitExceeded { limit: 2, ref path } if path.ends_with("a/b/c")),
            "unexpected error: {err:?}"
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_skips_symlinked_directories() {
        let temp_dir = create_test_dir();
        write_index(&temp_dir.path().join("real"), "# Real");
        std::os::unix::fs::symlink(temp_dir.path().join("real"), temp_dir.path().join("link"))
            .unwrap();

        let routes = Scanner::new("index.md", None).scan(temp_dir.path()).unwrap();

        assert_eq!(routes, vec!["real"]);
    }

    /// An unreadable subdirectory fails the whole walk rather than being skipped.
    #[cfg(unix)]
    #[test]
    fn test_scan_unreadable_subdirectory_fails_atomically() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = create_test_dir();
        write_index(&temp_dir.path().join("open"), "# Open");
        let locked = temp_dir.path().join("locked");
        write_index(&locked, "# Locked");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Privileged users bypass permission bits
        if fs::read_dir(&locked).is_ok() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let result = Scanner::new("index.md", None).scan(temp_dir.path());
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        let err = result.unwrap_err();
        assert_eq!(err.kind(), crate::StorageErrorKind::PermissionDenied);
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_skips_non_utf8_directory_and_its_subtree() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let temp_dir = create_test_dir();
        let odd = temp_dir.path().join(OsStr::from_bytes(b"caf\xe9"));
        // Some filesystems refuse names that are not UTF-8
        if fs::create_dir(&odd).is_err() {
            return;
        }
        write_index(&odd, "# Cafe");
        write_index(&odd.join("menu"), "# Menu");
        write_index(&temp_dir.path().join("plain"), "# Plain");

        let routes = Scanner::new("index.md", None).scan(temp_dir.path()).unwrap();

        assert_eq!(routes, vec!["plain"]);
    }
}
