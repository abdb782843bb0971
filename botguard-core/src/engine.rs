// botguard-core/src/engine.rs
//! Defines the [`Sanitizer`], the configured entry point to every transform.
//!
//! A `Sanitizer` is built once from a [`SanitizerConfig`]: the bot identity and
//! the sensitive key matcher are compiled at construction and then only read.
//! It holds no mutable state, so one instance can be shared across threads.
//!
//! License: MIT OR APACHE 2.0

use log::debug;

use crate::config::SanitizerConfig;
use crate::errors::BotguardError;
use crate::sanitizers::command::sanitize_command_input;
use crate::sanitizers::environment::{self, EnvRedactionSummary, SensitiveKeyMatcher};
use crate::sanitizers::identity::{self, BotIdentity};
use crate::sanitizers::labels;
use crate::sanitizers::markdown::unescape_markdown;
use crate::validators;

/// The kind of untrusted text field a caller is about to use.
///
/// Used with [`Sanitizer::apply`] when the transform is chosen at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text that will be echoed back into a thread.
    Comment,
    /// Text that will become (part of) a command.
    Command,
    /// Model output carrying escaped markdown.
    Markdown,
    /// A single issue/PR label.
    Label,
}

/// Stateless sanitizer with its configuration injected at construction.
#[derive(Debug)]
pub struct Sanitizer {
    identity: Option<BotIdentity>,
    sensitive_keys: SensitiveKeyMatcher,
}

impl Sanitizer {
    /// Builds a sanitizer from `config`.
    pub fn new(config: &SanitizerConfig) -> Result<Self, BotguardError> {
        let identity = BotIdentity::parse(config.bot_name.as_deref())?;
        let sensitive_keys = SensitiveKeyMatcher::new(config.effective_sensitive_terms())?;
        debug!(
            "Sanitizer ready: mention stripping {}, {} sensitive term(s).",
            if identity.is_some() { "on" } else { "off" },
            sensitive_keys.terms().len()
        );
        Ok(Self {
            identity,
            sensitive_keys,
        })
    }

    /// A sanitizer with no bot identity and the built-in sensitive terms.
    pub fn with_defaults() -> Result<Self, BotguardError> {
        Self::new(&SanitizerConfig::default())
    }

    pub fn bot_identity(&self) -> Option<&BotIdentity> {
        self.identity.as_ref()
    }

    pub fn sensitive_keys(&self) -> &SensitiveKeyMatcher {
        &self.sensitive_keys
    }

    pub fn strip_bot_mentions(&self, text: Option<&str>) -> Option<String> {
        identity::strip_bot_mentions(text, self.identity.as_ref())
    }

    pub fn sanitize_labels<S: AsRef<str>>(&self, raw: &[S]) -> Vec<String> {
        labels::sanitize_labels(raw)
    }

    pub fn sanitize_command_input(&self, text: Option<&str>) -> Option<String> {
        sanitize_command_input(text)
    }

    pub fn validate_repository_name(&self, name: &str) -> bool {
        validators::is_valid_repository_name(name)
    }

    pub fn validate_git_ref(&self, reference: &str) -> bool {
        validators::is_valid_git_ref(reference)
    }

    pub fn sanitize_environment_value(&self, key: &str, value: &str) -> String {
        environment::sanitize_environment_value(key, value, &self.sensitive_keys)
    }

    pub fn redact_environment<I, K, V>(&self, pairs: I) -> (Vec<(String, String)>, EnvRedactionSummary)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        environment::redact_environment(pairs, &self.sensitive_keys)
    }

    pub fn unescape_markdown(&self, text: Option<&str>) -> Option<String> {
        unescape_markdown(text)
    }

    /// Applies the text transform matching `kind`.
    pub fn apply(&self, kind: FieldKind, text: Option<&str>) -> Option<String> {
        match kind {
            FieldKind::Comment => self.strip_bot_mentions(text),
            FieldKind::Command => self.sanitize_command_input(text),
            FieldKind::Markdown => self.unescape_markdown(text),
            FieldKind::Label => text.map(labels::sanitize_label),
        }
    }
}
