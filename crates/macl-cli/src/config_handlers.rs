//! Handler functions for `macl config` subcommands.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::cli::ConfigAction;
use crate::config::MaclConfig;
use crate::error::{Error, Result};

/// Dispatch a config subcommand.
pub fn handle_config_command(
    config_path: Option<&Path>,
    action: ConfigAction,
    out: &mut dyn Write,
) -> Result<()> {
    let text = match action {
        ConfigAction::Path => cmd_config_path(config_path)?,
        ConfigAction::Show => cmd_config_show(config_path)?,
        ConfigAction::Init { file, force } => {
            let path = cmd_config_init(file.as_deref(), force)?;
            format!("Config file created at {}\n", path.display())
        }
    };
    out.write_all(text.as_bytes())
        .map_err(|e| Error::io_with_path(e, "<stdout>"))
}

/// The config file path that would be used.
pub fn cmd_config_path(config_path: Option<&Path>) -> Result<String> {
    let path = MaclConfig::resolve_config_path(config_path).ok_or_else(|| {
        Error::config("Could not determine config directory for this platform")
    })?;
    if !path.exists() {
        tracing::warn!(
            "{} does not exist, run `{} config init` to create it",
            path.display(),
            MaclConfig::project_name()
        );
    }
    Ok(format!("{}\n", path.display()))
}

/// The effective configuration as TOML.
pub fn cmd_config_show(config_path: Option<&Path>) -> Result<String> {
    MaclConfig::load(config_path)?.to_toml_string()
}

/// Writes a default config file and returns its path.
pub fn cmd_config_init(file: Option<&Path>, force: bool) -> Result<PathBuf> {
    let path = match file {
        Some(p) => p.to_path_buf(),
        None => MaclConfig::default_config_path()
            .ok_or_else(|| Error::config("Could not determine config directory"))?,
    };

    if path.exists() && !force {
        return Err(Error::config(format!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        )));
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| Error::io_with_path(e, parent))?;
    }

    let toml_str = MaclConfig::default().to_toml_string()?;
    std::fs::write(&path, &toml_str).map_err(|e| Error::io_with_path(e, &path))?;
    tracing::info!(path = %path.display(), "Created config file");
    Ok(path)
}
