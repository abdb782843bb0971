//! errors.rs - Custom error types for the botguard-core library.
//!
//! Every transform in this crate is total and never returns an error. The variants
//! below only arise while *building* the inputs to those transforms: compiling the
//! bot identity matcher, building the sensitive-key automaton, or validating a config.
//! Loading config files reports through `anyhow` instead.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// This enum represents all possible error types in the `botguard-core` library.
///
/// `#[non_exhaustive]` lets new construction-time failures be added without
/// breaking downstream matches.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum BotguardError {
    #[error("Failed to compile mention pattern for bot identity '{0}': {1}")]
    IdentityPattern(String, regex::Error),

    #[error("Bot name '{0}' contains '@' after the leading prefix")]
    InvalidBotName(String),

    #[error("The sensitive key term list is empty; at least one term is required")]
    EmptySensitiveTerms,

    #[error("Sensitive key term at position {0} is empty")]
    EmptySensitiveTerm(usize),

    #[error("Failed to build sensitive key matcher: {0}")]
    SensitiveMatcher(String),
}
