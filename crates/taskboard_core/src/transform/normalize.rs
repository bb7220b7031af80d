//! Task label normalization.
//!
//! # Responsibility
//! - Strip the decorative leading token (emoji, bullet, symbol run) from a
//!   task label so the flat list shows plain text.
//!
//! # Invariants
//! - Only the matched prefix is removed; the remainder is byte-identical.
//! - `normalize(normalize(x)) == normalize(x)`.
//! - Word characters are ASCII `[0-9A-Za-z_]`. Emoji joined with ZWJ or
//!   variation selectors count as one decorative run.

use once_cell::sync::Lazy;
use regex::Regex;

static DECORATIVE_PREFIX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^0-9A-Za-z_]+ ").expect("valid decorative prefix regex"));

/// Returns the byte length of the decorative prefix at the start of `label`.
///
/// Returns `0` when the label carries no prefix.
pub fn decorative_prefix_len(label: &str) -> usize {
    DECORATIVE_PREFIX_RE
        .find(label)
        .map(|found| found.end())
        .unwrap_or(0)
}

/// Returns `label` without its decorative prefix.
///
/// A prefix is a run of one or more non-word characters followed by a
/// space, anchored at the start of the string. Plain labels are returned
/// unchanged.
pub fn normalize(label: &str) -> String {
    label[decorative_prefix_len(label)..].to_string()
}

/// Returns whether `label` is already in normalized form.
pub fn is_normalized(label: &str) -> bool {
    decorative_prefix_len(label) == 0
}
