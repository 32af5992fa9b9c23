// ABOUTME: JSON and YAML encoding of host configs, plus loading them from disk.
// ABOUTME: Picks the format from the file extension and discovers hostconfig.* files.

use crate::error::{Error, Result};
use crate::host_config::HostConfig;
use std::path::Path;

pub const CONFIG_FILENAME: &str = "hostconfig.yml";
pub const CONFIG_FILENAME_ALT: &str = "hostconfig.yaml";
pub const CONFIG_FILENAME_JSON: &str = "hostconfig.json";

/// On-disk encodings of a host config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Format::Json),
            Some("yml") | Some("yaml") => Ok(Format::Yaml),
            _ => Err(Error::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

impl HostConfig {
    /// Decode the engine's JSON form. Absent keys stay unset.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(Error::from)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(Error::from)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(Error::from)
    }

    /// Decode a YAML document using the same capitalized keys as the JSON form.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(Error::from)
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(Error::from)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let format = Format::from_path(path)?;
        tracing::debug!(path = %path.display(), ?format, "loading host config");
        let content = std::fs::read_to_string(path)?;
        match format {
            Format::Json => Self::from_json(&content),
            Format::Yaml => Self::from_yaml(&content),
        }
    }

    pub fn discover(dir: &Path) -> Result<Self> {
        let candidates = [
            dir.join(CONFIG_FILENAME),
            dir.join(CONFIG_FILENAME_ALT),
            dir.join(CONFIG_FILENAME_JSON),
        ];

        for path in &candidates {
            if path.exists() {
                return Self::load(path);
            }
        }

        Err(Error::ConfigNotFound(dir.to_path_buf()))
    }
}
