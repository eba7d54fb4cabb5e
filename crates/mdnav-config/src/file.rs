//! `mdnav.toml` as written on disk.
//!
//! Every key is optional. Paths stay as the strings the author wrote until
//! [`crate::Config`] resolves them against the config file's directory.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::ConfigError;
use crate::expand::expand_field;

/// Configuration filename looked up by discovery.
pub(crate) const CONFIG_FILENAME: &str = "mdnav.toml";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ConfigFile {
    pub(crate) server: ServerSection,
    pub(crate) content: ContentSection,
    pub(crate) template: TemplateSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ServerSection {
    pub(crate) host: Option<String>,
    pub(crate) port: Option<u16>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ContentSection {
    pub(crate) dir: Option<String>,
    pub(crate) index_file: Option<String>,
    pub(crate) max_depth: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct TemplateSection {
    pub(crate) path: Option<String>,
}

impl ConfigFile {
    /// Parse a config file and substitute environment references.
    pub(crate) fn read(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        let mut file: Self = toml::from_str(&text)?;
        file.expand_env()?;
        Ok(file)
    }

    fn expand_env(&mut self) -> Result<(), ConfigError> {
        expand_field(&mut self.server.host, "server.host")?;
        expand_field(&mut self.content.dir, "content.dir")?;
        expand_field(&mut self.template.path, "template.path")?;
        Ok(())
    }
}

/// Find `mdnav.toml` in `start` or the closest ancestor that has one.
pub(crate) fn find_config_file(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(CONFIG_FILENAME))
        .find(|candidate| candidate.is_file())
}
