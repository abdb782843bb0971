//! Label allow-listing.
//!
//! Labels come straight from issue trackers and are later spliced into API calls
//! and command arguments. Anything outside the allow-list is dropped, never escaped.

use super::patterns::LABEL_EXTRA_CHARS;

fn is_label_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || LABEL_EXTRA_CHARS.contains(&c)
}

/// Filters a single label down to the allowed characters.
///
/// The result may be empty; deciding what to do with an empty label is up to the caller.
pub fn sanitize_label(label: &str) -> String {
    label.chars().filter(|c| is_label_char(*c)).collect()
}

/// Filters every label, keeping the sequence one-to-one and in order.
pub fn sanitize_labels<S: AsRef<str>>(labels: &[S]) -> Vec<String> {
    labels.iter().map(|l| sanitize_label(l.as_ref())).collect()
}
