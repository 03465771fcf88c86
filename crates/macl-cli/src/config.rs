//! Configuration file support.
//!
//! The config file is optional TOML:
//!
//! ```toml
//! # Default ACL file when --acl-file / MACL_ACL_FILE are not given
//! acl_file = "/etc/mosquitto/acl"
//! # Write changes back to the ACL file instead of printing them
//! in_place = false
//! ```
//!
//! Lookup order: `--config` (or `MACL_CONFIG`), then
//! `<config dir>/macl/config.toml`. A missing default file means defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const PROJECT_NAME: &str = "macl";
const CONFIG_FILE: &str = "config.toml";

/// Settings read from the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaclConfig {
    /// ACL file used when none is given on the command line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acl_file: Option<PathBuf>,
    /// Write results back to the ACL file instead of stdout.
    pub in_place: bool,
}

impl MaclConfig {
    /// Name used for the config directory.
    pub fn project_name() -> &'static str {
        PROJECT_NAME
    }

    /// `<config dir>/macl/config.toml`, if the platform has a config dir.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(PROJECT_NAME).join(CONFIG_FILE))
    }

    /// The explicit path if given, otherwise the default path.
    pub fn resolve_config_path(config_path: Option<&Path>) -> Option<PathBuf> {
        match config_path {
            Some(path) => Some(path.to_path_buf()),
            None => Self::default_config_path(),
        }
    }

    /// Loads the configuration.
    ///
    /// An explicit path must exist. The default path is only read if present.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let path = match config_path {
            Some(path) if !path.exists() => {
                return Err(Error::config(format!(
                    "Config file does not exist at {}",
                    path.display()
                )));
            }
            Some(path) => path.to_path_buf(),
            None => match Self::default_config_path() {
                Some(path) if path.exists() => path,
                _ => {
                    tracing::debug!("No config file found, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        tracing::debug!(path = %path.display(), "Loading config");
        let content = std::fs::read_to_string(&path).map_err(|e| Error::io_with_path(e, &path))?;
        Self::from_toml_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))
    }

    /// Parses configuration from TOML text.
    pub fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Renders the configuration as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }
}
