//! Configuration management for mdnav.
//!
//! `mdnav.toml` is looked up in the working directory and its ancestors
//! unless a path is given explicitly. Relative paths in the file are resolved
//! against the directory that holds it; without a file, everything defaults
//! relative to the working directory.
//!
//! ```toml
//! [server]
//! host = "127.0.0.1"
//! port = 3001
//!
//! [content]
//! dir = "content"
//! index_file = "index.md"
//! max_depth = 32
//!
//! [template]
//! path = "template.html"
//! ```
//!
//! `server.host`, `content.dir` and `template.path` accept `${VAR}` and
//! `${VAR:-default}` references. Command-line values ([`CliSettings`]) win
//! over anything in the file.

mod error;
mod expand;
mod file;

use std::path::{Path, PathBuf};

pub use error::ConfigError;
use file::{ConfigFile, find_config_file};

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3001;
const DEFAULT_CONTENT_DIR: &str = "content";
const DEFAULT_INDEX_FILE: &str = "index.md";
const DEFAULT_TEMPLATE: &str = "template.html";

/// Command-line values that take precedence over the config file.
#[derive(Debug, Default)]
pub struct CliSettings {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub content_dir: Option<PathBuf>,
    pub template_path: Option<PathBuf>,
}

/// Fully resolved configuration.
#[derive(Debug)]
pub struct Config {
    pub server: ServerConfig,
    pub content: ContentConfig,
    /// HTML template with a `{{content}}` placeholder.
    pub template_path: PathBuf,
    /// File the configuration was read from, if any.
    pub config_path: Option<PathBuf>,
}

/// Listening address.
#[derive(Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Content tree settings.
#[derive(Debug)]
pub struct ContentConfig {
    /// Content root directory.
    pub dir: PathBuf,
    /// Filename that makes a directory addressable.
    pub index_file: String,
    /// Deepest directory level route discovery may descend to.
    pub max_depth: Option<usize>,
}

impl Config {
    /// Load configuration and apply command-line overrides.
    ///
    /// With `config_path`, that file must exist. Without it, the closest
    /// `mdnav.toml` at or above the working directory is used, falling back
    /// to defaults when there is none.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed, an
    /// environment reference cannot be substituted, or the result is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let path = match config_path {
            Some(path) if !path.exists() => {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Some(path) => Some(path.to_path_buf()),
            None => std::env::current_dir()
                .ok()
                .and_then(|cwd| find_config_file(&cwd)),
        };

        let mut config = match path {
            Some(path) => Self::from_file(&path)?,
            None => Self::resolve(ConfigFile::default(), &std::env::current_dir()?),
        };

        if let Some(settings) = cli_settings {
            config.apply(settings);
        }
        config.validate()?;

        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let file = ConfigFile::read(path)?;
        let base = path.parent().unwrap_or(Path::new("."));
        let mut config = Self::resolve(file, base);
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Turn raw file values into a configuration, resolving relative paths
    /// against `base`.
    fn resolve(file: ConfigFile, base: &Path) -> Self {
        let ConfigFile {
            server,
            content,
            template,
        } = file;

        Self {
            server: ServerConfig {
                host: server.host.unwrap_or_else(|| DEFAULT_HOST.to_owned()),
                port: server.port.unwrap_or(DEFAULT_PORT),
            },
            content: ContentConfig {
                dir: base.join(content.dir.as_deref().unwrap_or(DEFAULT_CONTENT_DIR)),
                index_file: content
                    .index_file
                    .unwrap_or_else(|| DEFAULT_INDEX_FILE.to_owned()),
                max_depth: content.max_depth,
            },
            template_path: base.join(template.path.as_deref().unwrap_or(DEFAULT_TEMPLATE)),
            config_path: None,
        }
    }

    fn apply(&mut self, settings: &CliSettings) {
        if let Some(host) = &settings.host {
            self.server.host.clone_from(host);
        }
        if let Some(port) = settings.port {
            self.server.port = port;
        }
        if let Some(dir) = &settings.content_dir {
            self.content.dir.clone_from(dir);
        }
        if let Some(path) = &settings.template_path {
            self.template_path.clone_from(path);
        }
    }

    /// Check values that parse but cannot work.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] naming the first offending key.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: &str| Err(ConfigError::Validation(msg.to_owned()));

        if self.server.host.is_empty() {
            return invalid("server.host cannot be empty");
        }
        if self.server.port == 0 {
            return invalid("server.port cannot be 0");
        }

        let index_file = self.content.index_file.as_str();
        if index_file.is_empty() {
            return invalid("content.index_file cannot be empty");
        }
        if matches!(index_file, "." | "..") || index_file.contains(['/', '\\']) {
            return invalid("content.index_file must be a plain filename");
        }
        if self.content.max_depth == Some(0) {
            return invalid("content.max_depth must be greater than 0");
        }

        Ok(())
    }
}
