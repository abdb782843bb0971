//! Command-input sanitization.
//!
//! Strips the characters that change how a shell interprets a string. This is a
//! filter over a fixed hazard set, not a shell parser; callers must still quote the
//! result before it reaches a shell.
//!
//! License: MIT OR APACHE 2.0

use log::debug;

use super::patterns::SHELL_HAZARD_CHARS;

/// Returns `true` if `text` contains any character from the hazard set.
pub fn contains_shell_hazard(text: &str) -> bool {
    text.contains(SHELL_HAZARD_CHARS)
}

/// Removes every hazard character and trims surrounding whitespace.
///
/// Absent input stays absent. Stripped characters cannot be reintroduced by the
/// trim, so the transform is idempotent.
pub fn sanitize_command_input(text: Option<&str>) -> Option<String> {
    let text = text?;
    let stripped: String = text.chars().filter(|c| !SHELL_HAZARD_CHARS.contains(c)).collect();
    if stripped.len() != text.len() {
        debug!(
            "Stripped {} byte(s) of shell metacharacters from command input.",
            text.len() - stripped.len()
        );
    }
    Some(stripped.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sanitize(s: &str) -> String {
        sanitize_command_input(Some(s)).unwrap()
    }

    #[test]
    fn test_strips_classic_primitives() {
        assert_eq!(sanitize("ls `whoami`"), "ls whoami");
        assert_eq!(sanitize("echo $HOME"), "echo HOME");
        assert_eq!(sanitize("a; b"), "a b");
        assert_eq!(sanitize("cat x | nc host 1"), "cat x  nc host 1");
        assert_eq!(sanitize("make && rm -rf /"), "make  rm -rf /");
        assert_eq!(sanitize("cat < in > out"), "cat  in  out");
    }

    #[test]
    fn test_strips_line_terminators() {
        assert_eq!(sanitize("run tests\nrm -rf /"), "run testsrm -rf /");
        assert!(!sanitize("a\r\nb\0c").contains(['\r', '\n', '\0']));
    }

    #[test]
    fn test_safe_input_is_only_trimmed() {
        assert_eq!(sanitize("  run the tests please  "), "run the tests please");
        assert_eq!(sanitize("npm test"), "npm test");
    }

    #[test]
    fn test_absent_and_empty() {
        assert_eq!(sanitize_command_input(None), None);
        assert_eq!(sanitize_command_input(Some("")), Some(String::new()));
    }

    #[test]
    fn test_only_hazards_becomes_empty() {
        assert_eq!(sanitize(" $;|& "), "");
    }

    #[test]
    fn test_contains_shell_hazard() {
        assert!(contains_shell_hazard("a$b"));
        assert!(!contains_shell_hazard("plain text"));
    }
}
