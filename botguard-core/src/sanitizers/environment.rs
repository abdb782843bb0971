//! Secret-key redaction for environment entries.
//!
//! Classification is by key name only: a key whose lowercase form contains any
//! configured sensitive term has its value replaced by [`REDACTION_MARKER`]. The
//! value itself is never inspected.
//!
//! License: MIT OR APACHE 2.0

use std::collections::HashSet;
use std::fmt;

use daachorse::DoubleArrayAhoCorasick;
use log::debug;

use super::patterns::{DEFAULT_SENSITIVE_KEY_TERMS, REDACTION_MARKER};
use crate::errors::BotguardError;

/// Case-insensitive substring matcher over a set of sensitive key terms.
pub struct SensitiveKeyMatcher {
    automaton: DoubleArrayAhoCorasick<usize>,
    terms: Vec<String>,
}

impl fmt::Debug for SensitiveKeyMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SensitiveKeyMatcher")
            .field("automaton", &"<DoubleArrayAhoCorasick>")
            .field("terms", &self.terms)
            .finish()
    }
}

impl SensitiveKeyMatcher {
    /// Builds a matcher from `terms`.
    ///
    /// Terms are lowercased and deduplicated. An empty list, or an empty term,
    /// is rejected: an empty term would match every key and an empty list none.
    pub fn new<I, S>(terms: I) -> Result<Self, BotguardError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut normalized = Vec::new();
        for (idx, term) in terms.into_iter().enumerate() {
            let term = term.as_ref().trim().to_lowercase();
            if term.is_empty() {
                return Err(BotguardError::EmptySensitiveTerm(idx));
            }
            if seen.insert(term.clone()) {
                normalized.push(term);
            }
        }
        if normalized.is_empty() {
            return Err(BotguardError::EmptySensitiveTerms);
        }

        let automaton = DoubleArrayAhoCorasick::new(&normalized)
            .map_err(|e| BotguardError::SensitiveMatcher(e.to_string()))?;

        debug!("Built sensitive key matcher with {} term(s).", normalized.len());
        Ok(Self {
            automaton,
            terms: normalized,
        })
    }

    /// A matcher over [`DEFAULT_SENSITIVE_KEY_TERMS`].
    pub fn with_defaults() -> Result<Self, BotguardError> {
        Self::new(DEFAULT_SENSITIVE_KEY_TERMS)
    }

    /// The normalized terms this matcher was built from.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Returns `true` if `key` contains any sensitive term, ignoring case.
    pub fn is_sensitive(&self, key: &str) -> bool {
        let lowered = key.to_lowercase();
        self.automaton.find_iter(&lowered).next().is_some()
    }
}

/// Returns the redaction marker when `key` is sensitive, otherwise `value` unchanged.
pub fn sanitize_environment_value(key: &str, value: &str, matcher: &SensitiveKeyMatcher) -> String {
    if matcher.is_sensitive(key) {
        debug!("Redacting value of environment key '{}'.", key);
        REDACTION_MARKER.to_string()
    } else {
        value.to_string()
    }
}

/// Counts produced by [`redact_environment`]. Holds key names only, never values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvRedactionSummary {
    pub total: usize,
    pub redacted_keys: Vec<String>,
}

impl EnvRedactionSummary {
    pub fn redacted(&self) -> usize {
        self.redacted_keys.len()
    }
}

/// Redacts a whole environment snapshot, preserving entry order.
pub fn redact_environment<I, K, V>(
    pairs: I,
    matcher: &SensitiveKeyMatcher,
) -> (Vec<(String, String)>, EnvRedactionSummary)
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut summary = EnvRedactionSummary::default();
    let redacted = pairs
        .into_iter()
        .map(|(key, value)| {
            let key = key.as_ref();
            summary.total += 1;
            if matcher.is_sensitive(key) {
                summary.redacted_keys.push(key.to_string());
                (key.to_string(), REDACTION_MARKER.to_string())
            } else {
                (key.to_string(), value.as_ref().to_string())
            }
        })
        .collect();

    debug!(
        "Environment snapshot: {} entries, {} redacted.",
        summary.total,
        summary.redacted()
    );
    (redacted, summary)
}
