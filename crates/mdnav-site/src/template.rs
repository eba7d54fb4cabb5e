//! HTML page template.
//!
//! A template is an HTML file with a `{{content}}` placeholder. It is read
//! from disk for every page render so edits show up without a restart.

use std::path::{Path, PathBuf};

/// Placeholder replaced with rendered page HTML.
pub const CONTENT_PLACEHOLDER: &str = "{{content}}";

/// Error returned when the template file cannot be read.
#[derive(Debug, thiserror::Error)]
#[error("Template file not readable: {}: {source}", .path.display())]
pub struct TemplateError {
    /// Configured template path.
    pub path: PathBuf,
    /// Underlying I/O error.
    #[source]
    pub source: std::io::Error,
}

/// Loaded page template.
#[derive(Clone, Debug)]
pub struct Template {
    source: String,
}

impl Template {
    /// Create a template from a string.
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Read a template file.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError`] if the file cannot be read.
    pub fn load(path: &Path) -> Result<Self, TemplateError> {
        let source = std::fs::read_to_string(path).map_err(|source| TemplateError {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(source))
    }

    /// Substitute `html` for the first placeholder.
    ///
    /// Later placeholders are left as-is. A template without a placeholder is
    /// returned unchanged.
    #[must_use]
    pub fn apply(&self, html: &str) -> String {
        self.source.replacen(CONTENT_PLACEHOLDER, html, 1)
    }
}
