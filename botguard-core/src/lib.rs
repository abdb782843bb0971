// botguard-core/src/lib.rs
//! # botguard Core Library
//!
//! `botguard-core` is the input-sanitization and validation layer for a bot-driven
//! automation pipeline: the kind that turns chat or issue-comment text into shell
//! commands, git operations and API calls. Given untrusted text it produces either
//! a safe, well-formed value or a definitive rejection.
//!
//! Every transform is pure and total. Absent input (`None`) comes back absent,
//! malformed input gets a defined output, and the only configuration consulted is
//! passed in explicitly (a bot identity and a sensitive key-term list).
//!
//! ## Modules
//!
//! * `sanitizers`: mention stripping, label allow-listing, command-input stripping,
//!   secret-key redaction and markdown unescaping, plus the shared `patterns` tables.
//! * `validators`: repository name and git ref grammar checks.
//! * `config`: `SanitizerConfig` loading, merging and validation.
//! * `engine`: the `Sanitizer` facade with configuration injected once.
//! * `errors`: construction-time error type.
//!
//! ## Usage Example
//!
//! ```rust
//! use botguard_core::{Sanitizer, SanitizerConfig};
//!
//! let config = SanitizerConfig::default().with_bot_name(Some("@ReviewBot".to_string()));
//! let sanitizer = Sanitizer::new(&config).unwrap();
//!
//! assert_eq!(
//!     sanitizer.strip_bot_mentions(Some("ping @reviewbot")),
//!     Some("ping ReviewBot".to_string())
//! );
//! assert_eq!(
//!     sanitizer.sanitize_command_input(Some("npm test; rm -rf /")),
//!     Some("npm test rm -rf /".to_string())
//! );
//! assert!(sanitizer.validate_git_ref("refs/heads/main"));
//! assert_eq!(sanitizer.sanitize_environment_value("GITHUB_TOKEN", "ghp_x"), "[REDACTED]");
//! ```
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod config;
pub mod engine;
pub mod errors;
pub mod sanitizers;
pub mod validators;

/// Re-exports the configuration types.
pub use config::{merge_config, SanitizerConfig, BOT_NAME_ENV_VAR};

/// Re-exports the custom error type for clear error reporting.
pub use errors::BotguardError;

/// Re-exports the configured facade.
pub use engine::{FieldKind, Sanitizer};

/// Re-exports the free-function transforms for callers that manage their own config.
pub use sanitizers::command::{contains_shell_hazard, sanitize_command_input};
pub use sanitizers::environment::{
    redact_environment, sanitize_environment_value, EnvRedactionSummary, SensitiveKeyMatcher,
};
pub use sanitizers::identity::{strip_bot_mentions, BotIdentity};
pub use sanitizers::labels::{sanitize_label, sanitize_labels};
pub use sanitizers::markdown::unescape_markdown;
pub use sanitizers::patterns::{
    DEFAULT_SENSITIVE_KEY_TERMS, REDACTION_MARKER, SENSITIVE_TERMS_VERSION, SHELL_HAZARD_CHARS,
    SHELL_HAZARD_SET_VERSION,
};
pub use validators::{is_valid_git_ref, is_valid_repository_name};
