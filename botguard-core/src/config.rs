//! Configuration management for `botguard-core`.
//!
//! A [`SanitizerConfig`] carries the only two externally supplied inputs the
//! transforms depend on: the bot identity and the sensitive key-term list. It is
//! loaded and merged here, then handed to [`crate::Sanitizer::new`] once; the
//! transforms themselves never read files or process state.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::errors::BotguardError;
use crate::sanitizers::environment::SensitiveKeyMatcher;
use crate::sanitizers::identity::BotIdentity;
use crate::sanitizers::patterns::DEFAULT_SENSITIVE_KEY_TERMS;

/// Environment variable conventionally holding the bot handle.
pub const BOT_NAME_ENV_VAR: &str = "BOT_USERNAME";

/// The top-level sanitizer configuration.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct SanitizerConfig {
    /// The bot handle, with or without a leading `@`. `None` disables mention stripping.
    pub bot_name: Option<String>,
    /// Replaces the built-in sensitive key terms when set.
    pub sensitive_key_terms: Option<Vec<String>>,
    /// Appended to the effective sensitive key terms.
    pub extra_sensitive_key_terms: Vec<String>,
}

impl SanitizerConfig {
    /// Loads the built-in configuration embedded in the crate.
    pub fn load_default() -> Result<Self> {
        debug!("Loading default sanitizer config from embedded string...");
        let default_yaml = include_str!("../config/default_config.yaml");
        let config: SanitizerConfig =
            serde_yml::from_str(default_yaml).context("Failed to parse default sanitizer config")?;
        Ok(config)
    }

    /// Loads a configuration from a YAML file and validates it.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading sanitizer config from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: SanitizerConfig = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        config
            .validate()
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        info!(
            "Loaded sanitizer config from {} ({} sensitive term(s), bot identity {}).",
            path.display(),
            config.effective_sensitive_terms().len(),
            if config.bot_name.is_some() { "set" } else { "unset" }
        );
        Ok(config)
    }

    /// Overrides `bot_name` from the environment variable `var`, if it is set and non-empty.
    ///
    /// This is the one place process state is read; call it while assembling the
    /// config, never from transform code.
    pub fn with_bot_name_from_env(self, var: &str) -> Self {
        match std::env::var(var) {
            Ok(value) if !value.trim().is_empty() => {
                debug!("Bot identity taken from environment variable {}.", var);
                self.with_bot_name(Some(value))
            }
            _ => self,
        }
    }

    /// Overrides `bot_name` when `name` is `Some`.
    pub fn with_bot_name(mut self, name: Option<String>) -> Self {
        if name.is_some() {
            self.bot_name = name;
        }
        self
    }

    /// The sensitive terms in effect: the configured list (or the built-in one)
    /// followed by the extra terms.
    pub fn effective_sensitive_terms(&self) -> Vec<String> {
        let mut terms: Vec<String> = match &self.sensitive_key_terms {
            Some(terms) => terms.clone(),
            None => DEFAULT_SENSITIVE_KEY_TERMS.iter().map(|t| t.to_string()).collect(),
        };
        terms.extend(self.extra_sensitive_key_terms.iter().cloned());
        terms
    }

    /// Checks that the config can build a sanitizer.
    pub fn validate(&self) -> Result<(), BotguardError> {
        BotIdentity::parse(self.bot_name.as_deref())?;
        SensitiveKeyMatcher::new(self.effective_sensitive_terms())?;
        Ok(())
    }
}

/// Overlays a user configuration onto the defaults.
///
/// The user's `bot_name` and `sensitive_key_terms` win when set; extra terms from
/// both layers are kept.
pub fn merge_config(default_config: SanitizerConfig, user_config: Option<SanitizerConfig>) -> SanitizerConfig {
    let Some(user) = user_config else {
        debug!("No user sanitizer config provided; using defaults.");
        return default_config;
    };

    let mut extra = default_config.extra_sensitive_key_terms;
    extra.extend(user.extra_sensitive_key_terms);

    if user.sensitive_key_terms.is_some() {
        debug!("User config replaces the sensitive key term list.");
    }

    SanitizerConfig {
        bot_name: user.bot_name.or(default_config.bot_name),
        sensitive_key_terms: user.sensitive_key_terms.or(default_config.sensitive_key_terms),
        extra_sensitive_key_terms: extra,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_default_matches_constants() {
        let config = SanitizerConfig::load_default().unwrap();
        assert_eq!(config.bot_name, None);
        let expected: Vec<String> = DEFAULT_SENSITIVE_KEY_TERMS.iter().map(|t| t.to_string()).collect();
        assert_eq!(config.sensitive_key_terms, Some(expected.clone()));
        assert_eq!(config.effective_sensitive_terms(), expected);
    }

    #[test]
    fn test_derived_default_falls_back_to_constants() {
        let config = SanitizerConfig::default();
        assert_eq!(config.effective_sensitive_terms().len(), DEFAULT_SENSITIVE_KEY_TERMS.len());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_with_bot_name_ignores_none() {
        let config = SanitizerConfig::default().with_bot_name(Some("bot".into()));
        assert_eq!(config.clone().with_bot_name(None).bot_name.as_deref(), Some("bot"));
    }

    #[test]
    fn test_validate_rejects_empty_term_list() {
        let config = SanitizerConfig {
            sensitive_key_terms: Some(vec![]),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(BotguardError::EmptySensitiveTerms)));
    }

    #[test]
    fn test_extra_terms_rescue_empty_list() {
        let config = SanitizerConfig {
            sensitive_key_terms: Some(vec![]),
            extra_sensitive_key_terms: vec!["cookie".into()],
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
