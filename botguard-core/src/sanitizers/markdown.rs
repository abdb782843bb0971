//! Markdown unescaping for model-generated text.
//!
//! Upstream generation backslash-escapes newlines, quotes and markdown
//! punctuation. This pass undoes exactly those escapes and nothing else.

use super::patterns::MARKDOWN_ESCAPES;

fn unescaped(c: char) -> Option<char> {
    MARKDOWN_ESCAPES
        .iter()
        .find(|(escaped, _)| *escaped == c)
        .map(|(_, replacement)| *replacement)
}

/// Replaces each known two-character escape with its bare character.
///
/// The scan is a single left-to-right pass: a character produced by one
/// replacement is never re-read as the start of another escape. A backslash that
/// does not start a known escape is kept as-is.
pub fn unescape_markdown(text: Option<&str>) -> Option<String> {
    let text = text?;
    if !text.contains('\\') {
        return Some(text.to_string());
    }

    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(replacement) = chars.peek().copied().and_then(unescaped) {
                out.push(replacement);
                chars.next();
                continue;
            }
        }
        out.push(c);
    }
    Some(out)
}
