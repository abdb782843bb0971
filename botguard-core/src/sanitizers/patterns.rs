//! Shared character classes and term lists used by the sanitizers.
//!
//! These tables are the audited security boundary of the crate. Transform logic
//! reads them but never embeds its own literals, so extending a set only ever
//! touches this file. Bump the matching `*_VERSION` whenever a table changes.
//!
//! License: MIT OR APACHE 2.0

/// Version of [`SHELL_HAZARD_CHARS`].
pub const SHELL_HAZARD_SET_VERSION: &str = "1.1.0";

/// Characters stripped from command input.
///
/// 1.0.0 covered the classic injection primitives (command substitution,
/// variable expansion, sequencing, piping, backgrounding and redirection).
/// 1.1.0 added the line terminators and NUL, which also end a command in
/// POSIX shells.
pub const SHELL_HAZARD_CHARS: &[char] = &[
    '`', '$', ';', '|', '&', '>', '<', // 1.0.0
    '\n', '\r', '\0', // 1.1.0
];

/// Version of [`DEFAULT_SENSITIVE_KEY_TERMS`].
pub const SENSITIVE_TERMS_VERSION: &str = "1.0.0";

/// Lowercase substrings that mark an environment key as carrying a secret.
///
/// Matching is substring and case-insensitive, so `key` already covers
/// `AWS_ACCESS_KEY_ID`. The longer identifiers stay listed so an audit can see
/// them explicitly.
pub const DEFAULT_SENSITIVE_KEY_TERMS: &[&str] = &[
    "token",
    "secret",
    "key",
    "password",
    "passwd",
    "credential",
    "private",
    "aws_access_key_id",
    "aws_secret_access_key",
    "api_key",
    "github_token",
];

/// The fixed value substituted for any secret-classified content.
pub const REDACTION_MARKER: &str = "[REDACTED]";

/// Punctuation (besides ASCII letters and digits) allowed to survive in a label.
pub const LABEL_EXTRA_CHARS: &[char] = &['-', '_', ':', '.'];

/// Punctuation (besides ASCII letters and digits) allowed in a repository name.
pub const REPOSITORY_NAME_EXTRA_CHARS: &[char] = &['-', '_', '.'];

/// Punctuation (besides ASCII letters and digits) allowed in a git ref.
pub const GIT_REF_EXTRA_CHARS: &[char] = &['-', '_', '.', '/'];

/// Characters explicitly rejected in a git ref.
pub const GIT_REF_FORBIDDEN_CHARS: &[char] = &[' ', '@', '#'];

/// Sequence explicitly rejected in a git ref (range syntax in git revisions).
pub const GIT_REF_FORBIDDEN_SEQUENCE: &str = "..";

/// Escapes undone by the markdown unescaper, as `(escaped char, replacement)`.
///
/// Each entry stands for the two-character sequence `\` followed by the
/// escaped char.
pub const MARKDOWN_ESCAPES: &[(char, char)] = &[
    ('n', '\n'),
    ('"', '"'),
    ('\'', '\''),
    ('*', '*'),
    ('-', '-'),
    ('#', '#'),
    ('`', '`'),
    ('[', '['),
    (']', ']'),
    ('(', '('),
    (')', ')'),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hazard_set_covers_minimum_primitives() {
        for c in ['`', '$', ';', '|', '&', '>', '<'] {
            assert!(SHELL_HAZARD_CHARS.contains(&c), "missing hazard char {:?}", c);
        }
    }

    #[test]
    fn test_default_terms_are_lowercase_and_unique() {
        let mut seen = std::collections::HashSet::new();
        for term in DEFAULT_SENSITIVE_KEY_TERMS {
            assert_eq!(*term, term.to_lowercase());
            assert!(seen.insert(*term), "duplicate term {}", term);
        }
    }
}
