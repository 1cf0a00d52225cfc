// src/core/rules/line.rs
use once_cell::sync::Lazy;
use regex::Regex;

static BULLET_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\t*)-\s+(.*)$").expect("valid bullet regex"));
static BLOCK_PROPERTY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*([\w.-]+)::\s*(.+)$").expect("valid block property regex"));

/// Coarse classification of a single outline line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `-` marker at `depth` tabs of indentation.
    Bullet { depth: usize, text: &'a str },
    /// `key:: value`, either a page property or a block property.
    Property { key: &'a str, value: &'a str },
    Plain,
}

#[must_use]
pub fn classify(line: &str) -> LineKind<'_> {
    if let Some(caps) = BULLET_RE.captures(line) {
        let depth = caps.get(1).map_or(0, |m| m.as_str().len());
        let text = caps.get(2).map_or("", |m| m.as_str());
        return LineKind::Bullet { depth, text };
    }

    if let Some(caps) = BLOCK_PROPERTY_RE.captures(line) {
        if let (Some(key), Some(value)) = (caps.get(1), caps.get(2)) {
            return LineKind::Property {
                key: key.as_str(),
                value: value.as_str().trim(),
            };
        }
    }

    LineKind::Plain
}
