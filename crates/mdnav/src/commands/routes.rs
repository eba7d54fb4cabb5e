//! `mdnav routes` command implementation.
//!
//! Walks the content directory once and prints the discovered routes as JSON
//! on stdout, either as the flat route list or folded into the navigation
//! tree.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Args;
use mdnav_config::{CliSettings, Config};
use mdnav_site::build_navigation;
use mdnav_storage::{FsStorage, Storage};

use crate::error::CliError;

/// Arguments for the routes command.
#[derive(Args)]
pub(crate) struct RoutesArgs {
    /// Path to configuration file (default: auto-discover mdnav.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Content directory (overrides config).
    #[arg(long)]
    content_dir: Option<PathBuf>,

    /// Print the navigation tree instead of the flat route list.
    #[arg(long)]
    tree: bool,
}

impl RoutesArgs {
    /// Execute the routes command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails, the content tree cannot be
    /// walked, or stdout cannot be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            content_dir: self.content_dir,
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let storage = FsStorage::new(config.content.dir)
            .with_index_file(config.content.index_file)
            .with_max_depth(config.content.max_depth);

        let mut stdout = io::stdout().lock();
        write_routes(&storage, self.tree, &mut stdout)?;
        stdout.flush()?;

        Ok(())
    }
}

/// Discover routes and write them as pretty-printed JSON.
fn write_routes(storage: &dyn Storage, tree: bool, out: &mut impl Write) -> Result<(), CliError> {
    let routes = storage.routes()?;
    tracing::debug!(count = routes.len(), "Discovered routes");

    if tree {
        serde_json::to_writer_pretty(&mut *out, &build_navigation(&routes))?;
    } else {
        serde_json::to_writer_pretty(&mut *out, &routes)?;
    }
    writeln!(out)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    use super::*;

    fn content_tree() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("getting-started/install")).unwrap();
        std::fs::write(dir.path().join("index.md"), "# Home").unwrap();
        std::fs::write(dir.path().join("getting-started/index.md"), "# Start").unwrap();
        std::fs::write(
            dir.path().join("getting-started/install/index.md"),
            "# Install",
        )
        .unwrap();
        dir
    }

    fn run(storage: &FsStorage, tree: bool) -> Value {
        let mut buf = Vec::new();
        write_routes(storage, tree, &mut buf).unwrap();
        serde_json::from_slice(&buf).unwrap()
    }

    #[test]
    fn test_write_flat_routes() {
        let dir = content_tree();

        let json = run(&FsStorage::new(dir.path()), false);

        assert_eq!(json, json!(["getting-started", "getting-started/install"]));
    }

    #[test]
    fn test_write_navigation_tree() {
        let dir = content_tree();

        let json = run(&FsStorage::new(dir.path()), true);

        assert_eq!(
            json,
            json!([{
                "name": "getting started",
                "path": "getting-started",
                "children": [{"name": "install", "path": "getting-started/install"}]
            }])
        );
    }

    #[test]
    fn test_missing_content_dir_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FsStorage::new(dir.path().join("missing"));

        let result = write_routes(&storage, false, &mut Vec::<u8>::new());

        assert!(matches!(result, Err(CliError::Discovery(_))));
    }
}
