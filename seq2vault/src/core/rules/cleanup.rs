// src/core/rules/cleanup.rs
use once_cell::sync::Lazy;
use regex::Regex;

static COLLAPSED_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(?:-\s+)?collapsed::\s*true\s*$").expect("valid collapsed regex")
});
pub static LOGBOOK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s):LOGBOOK:.*?:END:").expect("valid logbook regex"));
pub static IMAGE_SIZING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{:height\s+\d+,?\s*:width\s+\d+\}").expect("valid image sizing regex")
});

/// Drops `collapsed:: true` lines, bare or as bullet content.
#[must_use]
pub fn remove_collapsed(content: &str) -> String {
    content
        .split('\n')
        .filter(|line| !COLLAPSED_RE.is_match(line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Deletes `:LOGBOOK: ... :END:` drawers.
///
/// When a drawer occupies whole lines those lines go too, so no whitespace-only
/// residue is left behind.
#[must_use]
pub fn remove_logbooks(content: &str) -> String {
    let mut output = String::with_capacity(content.len());
    let mut cursor = 0;

    for drawer in LOGBOOK_RE.find_iter(content) {
        let (mut start, mut end) = (drawer.start(), drawer.end());

        let line_start = content[..start].rfind('\n').map_or(0, |i| i + 1);
        let line_end = content[end..].find('\n').map_or(content.len(), |i| end + i);
        if line_start >= cursor
            && content[line_start..start].trim().is_empty()
            && content[end..line_end].trim().is_empty()
        {
            start = line_start;
            end = line_end.saturating_add(1).min(content.len());
        }

        output.push_str(&content[cursor..start]);
        cursor = end;
    }

    output.push_str(&content[cursor..]);
    output
}

/// Strips `{:height N, :width N}` image size hints.
#[must_use]
pub fn remove_image_sizing(content: &str) -> String {
    IMAGE_SIZING_RE.replace_all(content, "").into_owned()
}
