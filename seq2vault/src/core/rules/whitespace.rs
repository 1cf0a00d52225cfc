// src/core/rules/whitespace.rs
use once_cell::sync::Lazy;
use regex::Regex;

static BLANK_RUN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n(?:[ \t]*\n){2,}").expect("valid blank run regex"));

/// Collapses runs of blank lines to one, trims the note, and ends it with a
/// single newline.
#[must_use]
pub fn normalize_whitespace(content: &str) -> String {
    let collapsed = BLANK_RUN_RE.replace_all(content, "\n\n");
    let mut normalized = collapsed.trim().to_owned();
    normalized.push('\n');
    normalized
}
