//! Resolves the effective sanitizer configuration for a CLI run.
//!
//! Layers, lowest to highest: embedded defaults, the user config file
//! (`--config`, else `<config_dir>/botguard/config.yaml` if present),
//! `BOT_USERNAME`, then `--bot-name`.

use anyhow::{Context, Result};
use botguard_core::{merge_config, SanitizerConfig, BOT_NAME_ENV_VAR};
use log::debug;
use std::path::{Path, PathBuf};

/// The per-user config file location, if the platform has a config directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("botguard").join("config.yaml"))
}

/// Builds the effective config from the layers above.
pub fn resolve_config(explicit_path: Option<&Path>, bot_name: Option<String>) -> Result<SanitizerConfig> {
    let defaults = SanitizerConfig::load_default()?;

    let user_config = match explicit_path {
        Some(path) => Some(SanitizerConfig::load_from_file(path)?),
        None => match default_config_path() {
            Some(path) if path.is_file() => {
                debug!("Using user config at {}", path.display());
                Some(SanitizerConfig::load_from_file(&path)?)
            }
            _ => None,
        },
    };

    let config = merge_config(defaults, user_config)
        .with_bot_name_from_env(BOT_NAME_ENV_VAR)
        .with_bot_name(bot_name);
    config.validate().context("Invalid sanitizer configuration")?;
    Ok(config)
}
