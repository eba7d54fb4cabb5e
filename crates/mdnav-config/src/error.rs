use std::path::PathBuf;

/// Error raised while loading or validating `mdnav.toml`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An explicitly requested config file does not exist.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid TOML in configuration: {0}")]
    Parse(#[from] toml::de::Error),
    /// A value parsed but is unusable.
    #[error("Invalid configuration: {0}")]
    Validation(String),
    /// A `${VAR}` reference could not be substituted.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Dotted key of the offending value, e.g. `content.dir`.
        field: String,
        /// What went wrong with the reference.
        message: String,
    },
}
