//! Text-to-text subcommands: `mentions`, `command`, `unescape` and `labels`.

use anyhow::{Context, Result};
use botguard_core::{FieldKind, Sanitizer};
use log::debug;
use std::io::{Read, Write};

/// Which text transform a subcommand applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextTransform {
    Mentions,
    Command,
    Unescape,
}

impl TextTransform {
    fn field_kind(self) -> FieldKind {
        match self {
            TextTransform::Mentions => FieldKind::Comment,
            TextTransform::Command => FieldKind::Command,
            TextTransform::Unescape => FieldKind::Markdown,
        }
    }
}

/// Applies `transform` to `text`, or to all of `stdin` when `text` is `None`.
///
/// Inline text is written back with a trailing newline. Stdin content is written
/// back exactly as transformed, except for `command`, which trims and so gets a
/// newline appended.
pub fn run_text<R: Read, W: Write>(
    sanitizer: &Sanitizer,
    transform: TextTransform,
    text: Option<String>,
    stdin: &mut R,
    out: &mut W,
) -> Result<()> {
    let (input, from_stdin) = match text {
        Some(text) => (text, false),
        None => {
            let mut buf = String::new();
            stdin.read_to_string(&mut buf).context("Failed to read input from stdin")?;
            (buf, true)
        }
    };
    debug!("Applying {:?} to {} byte(s) of input.", transform, input.len());

    let output = sanitizer
        .apply(transform.field_kind(), Some(input.as_str()))
        .unwrap_or_default();

    if from_stdin && transform != TextTransform::Command {
        write!(out, "{}", output)?;
    } else {
        writeln!(out, "{}", output)?;
    }
    Ok(())
}

/// Writes one sanitized label per line, in input order. Labels that filter to
/// nothing produce an empty line so positions still line up.
pub fn run_labels<W: Write>(sanitizer: &Sanitizer, labels: &[String], out: &mut W) -> Result<()> {
    for label in sanitizer.sanitize_labels(labels) {
        writeln!(out, "{}", label)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use botguard_core::SanitizerConfig;

    fn sanitizer() -> Sanitizer {
        Sanitizer::new(&SanitizerConfig::default().with_bot_name(Some("bot".into()))).unwrap()
    }

    fn run(transform: TextTransform, text: Option<&str>, stdin: &str) -> String {
        let mut out = Vec::new();
        run_text(
            &sanitizer(),
            transform,
            text.map(str::to_string),
            &mut stdin.as_bytes(),
            &mut out,
        )
        .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_inline_text_gets_newline() {
        assert_eq!(run(TextTransform::Mentions, Some("hi @BOT"), ""), "hi bot\n");
    }

    #[test_log::test]
    fn test_stdin_preserved_verbatim() {
        assert_eq!(run(TextTransform::Unescape, None, "a\\nb\n"), "a\nb\n");
        assert_eq!(run(TextTransform::Mentions, None, "@bot\n\n"), "bot\n\n");
    }

    #[test]
    fn test_command_from_stdin_is_trimmed_then_terminated() {
        assert_eq!(run(TextTransform::Command, None, "make test; id\n"), "make test id\n");
    }

    #[test]
    fn test_labels_keep_positions() {
        let mut out = Vec::new();
        let labels = vec!["ok".to_string(), "$$".to_string(), "x y".to_string()];
        run_labels(&sanitizer(), &labels, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "ok\n\nxy\n");
    }

    #[test]
    fn test_no_labels_no_output() {
        let mut out = Vec::new();
        run_labels(&sanitizer(), &[], &mut out).unwrap();
        assert!(out.is_empty());
    }
}
