//! HTTP server for mdnav.
//!
//! Serves a content directory of markdown index documents over axum:
//! - `/navigation` and `/api/navigation` for the discovered route list and
//!   navigation tree
//! - `/api/content/{path}` for raw markdown
//! - any other GET path as a page rendered into the HTML template
//!
//! # Quick Start
//!
//! ```ignore
//! use std::path::PathBuf;
//! use mdnav_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig {
//!         content_dir: PathBuf::from("content"),
//!         template_path: PathBuf::from("template.html"),
//!         ..ServerConfig::default()
//!     };
//!
//!     run_server(config).await.unwrap();
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//! Browser ──HTTP──► axum router (mdnav-server)
//!                        │
//!                        └─► handlers ──► Site (mdnav-site)
//!                                           │
//!                                           ├─► FsStorage (routes, resolve)
//!                                           └─► MarkdownRenderer + template
//! ```

mod app;
mod error;
mod handlers;
mod middleware;
mod state;
#[cfg(test)]
mod test_support;

use std::path::PathBuf;
use std::sync::Arc;

use mdnav_site::Site;
use mdnav_storage::{DEFAULT_INDEX_FILE, FsStorage};
use state::AppState;
use tokio::net::TcpListener;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Content root directory.
    pub content_dir: PathBuf,
    /// HTML template with a `{{content}}` placeholder.
    pub template_path: PathBuf,
    /// Index document filename.
    pub index_file: String,
    /// Discovery depth cap (`None` for unlimited).
    pub max_depth: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 3001,
            content_dir: PathBuf::from("content"),
            template_path: PathBuf::from("template.html"),
            index_file: DEFAULT_INDEX_FILE.to_owned(),
            max_depth: None,
        }
    }
}

/// Run the server until Ctrl-C.
///
/// # Arguments
///
/// * `config` - Server configuration
///
/// # Errors
///
/// Returns an error if the address is invalid or the listener cannot bind.
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    if !config.content_dir.is_dir() {
        tracing::warn!(path = %config.content_dir.display(), "Content directory does not exist");
    }
    if !config.template_path.is_file() {
        tracing::warn!(path = %config.template_path.display(), "Template file does not exist");
    }

    let storage = Arc::new(
        FsStorage::new(config.content_dir)
            .with_index_file(config.index_file)
            .with_max_depth(config.max_depth),
    );
    let site = Site::new(storage, config.template_path);

    let state = Arc::new(AppState { site });
    let app = app::create_router(state);

    let listener = bind(&config.host, config.port).await?;
    tracing::info!(address = %listener.local_addr()?, "Starting server");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Bind a listener; `host` may be a hostname or an IPv4/IPv6 literal.
async fn bind(host: &str, port: u16) -> std::io::Result<TcpListener> {
    TcpListener::bind((host, port)).await
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create server configuration from a loaded `mdnav.toml`.
#[must_use]
pub fn server_config_from_config(config: &mdnav_config::Config) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        content_dir: config.content.dir.clone(),
        template_path: config.template_path.clone(),
        index_file: config.content.index_file.clone(),
        max_depth: config.content.max_depth,
    }
}
