// File: botguard-core/src/validators.rs
//! Structural validation for repository names and git refs.
//!
//! These are accept/reject predicates only. Nothing is repaired or partially
//! accepted: a name either matches its grammar or it is refused before any git
//! or API call is made with it.
//!
//! License: MIT OR APACHE 2.0

use crate::sanitizers::patterns::{
    GIT_REF_EXTRA_CHARS, GIT_REF_FORBIDDEN_CHARS, GIT_REF_FORBIDDEN_SEQUENCE,
    REPOSITORY_NAME_EXTRA_CHARS,
};

/// Validates a repository name.
///
/// # Arguments
///
/// * `name` - The bare repository name (no owner, no slash).
///
/// # Returns
///
/// `true` if `name` is non-empty and made only of ASCII letters, digits, `-`, `_` and `.`.
pub fn is_valid_repository_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || REPOSITORY_NAME_EXTRA_CHARS.contains(&c))
}

/// Validates a git ref such as `main`, `feature/name` or `refs/heads/main`.
///
/// # Arguments
///
/// * `reference` - The ref to check.
///
/// # Returns
///
/// `true` if `reference` is non-empty, made only of ASCII letters, digits, `-`, `_`,
/// `.` and `/`, and contains neither `..` nor any of space, `@`, `#`.
pub fn is_valid_git_ref(reference: &str) -> bool {
    if reference.is_empty() {
        return false;
    }
    // `..` is revision-range syntax; each dot on its own is fine.
    if reference.contains(GIT_REF_FORBIDDEN_SEQUENCE) {
        return false;
    }
    if reference.contains(GIT_REF_FORBIDDEN_CHARS) {
        return false;
    }
    reference
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || GIT_REF_EXTRA_CHARS.contains(&c))
}
