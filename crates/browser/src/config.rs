use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use crate::picker::PickerOptions;

type Result<T> = anyhow::Result<T>;

#[derive(Debug, Deserialize)]
pub struct BrowserConfig {
    /// Absolute URL of the site the libraries live under.
    pub web_url: String,
    /// Display name of the document library to list.
    pub library: String,
    /// Optional server-relative folder scope inside the library.
    #[serde(default)]
    pub folder_path: Option<String>,
    /// Optional comma-separated accepted file extensions.
    #[serde(default)]
    pub accepts: Option<String>,
    #[serde(default)]
    pub picker: PickerOptions,
}

impl BrowserConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        Self::from_str(&content)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("failed to deserialize browser config")
    }
}
