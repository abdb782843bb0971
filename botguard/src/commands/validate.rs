//! `validate-repo` and `validate-ref`: accept/reject with the exit status.

use anyhow::Result;
use botguard_core::Sanitizer;
use log::debug;
use std::io::Write;

/// What kind of name is being validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Repository,
    GitRef,
}

/// Checks `value` and, unless `quiet`, prints `valid` or `invalid` on stdout.
/// The caller maps the result to the exit status.
pub fn run_validate<W: Write>(
    sanitizer: &Sanitizer,
    target: Target,
    value: &str,
    quiet: bool,
    out: &mut W,
) -> Result<bool> {
    let valid = match target {
        Target::Repository => sanitizer.validate_repository_name(value),
        Target::GitRef => sanitizer.validate_git_ref(value),
    };
    debug!("{:?} validation result: {}", target, valid);

    if !quiet {
        writeln!(out, "{}", if valid { "valid" } else { "invalid" })?;
    }
    Ok(valid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_reports_result() {
        let sanitizer = Sanitizer::with_defaults().unwrap();
        let mut out = Vec::new();
        assert!(run_validate(&sanitizer, Target::GitRef, "refs/heads/main", false, &mut out).unwrap());
        assert!(!run_validate(&sanitizer, Target::Repository, "my repo", false, &mut out).unwrap());
        assert_eq!(String::from_utf8(out).unwrap(), "valid\ninvalid\n");
    }

    #[test]
    fn test_quiet_prints_nothing() {
        let sanitizer = Sanitizer::with_defaults().unwrap();
        let mut out = Vec::new();
        run_validate(&sanitizer, Target::GitRef, "a..b", true, &mut out).unwrap();
        assert!(out.is_empty());
    }
}
