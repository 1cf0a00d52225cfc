// src/core/rules/properties.rs
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

use crate::core::rules::numbered_lists::ORDER_LIST_KEY;
use crate::models::{Properties, PropertyValue};

/// Keys that drive other stages and never reach the frontmatter.
pub const RESERVED_KEYS: [&str; 3] = ["collapsed", ORDER_LIST_KEY, "id"];

/// Keys whose comma-separated values become YAML lists.
const LIST_KEYS: [&str; 3] = ["tags", "alias", "aliases"];

static PAGE_PROPERTY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([\w-]+)::\s*(.+)$").expect("valid page property regex"));

/// Splits the leading run of `key:: value` lines off a note.
///
/// Blank lines ahead of the first property are skipped. Scanning stops at the
/// first line that does not match the property grammar; everything from that
/// line on is returned untouched as the body.
#[must_use]
pub fn extract_properties(content: &str) -> (Properties, &str) {
    let mut properties: Properties = Vec::new();
    let mut offset = 0;
    let mut in_properties = false;

    for raw_line in content.split_inclusive('\n') {
        let line = raw_line.strip_suffix('\n').unwrap_or(raw_line);
        if !in_properties && line.trim().is_empty() {
            offset += raw_line.len();
            continue;
        }
        in_properties = true;

        let Some(caps) = PAGE_PROPERTY_RE.captures(line) else {
            return (properties, &content[offset..]);
        };
        offset += raw_line.len();

        let key = caps.get(1).map_or("", |m| m.as_str());
        let value = caps.get(2).map_or("", |m| m.as_str()).trim();
        if RESERVED_KEYS.contains(&key) {
            continue;
        }

        let value = if LIST_KEYS.contains(&key) && value.contains(',') {
            PropertyValue::List(
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|item| !item.is_empty())
                    .map(str::to_owned)
                    .collect(),
            )
        } else {
            PropertyValue::Scalar(value.to_owned())
        };

        // A repeated key keeps its first position and takes the last value.
        if let Some(existing) = properties.iter_mut().find(|(k, _)| k == key) {
            existing.1 = value;
        } else {
            properties.push((key.to_owned(), value));
        }
    }

    (properties, "")
}

/// Splits a leading `---` delimited frontmatter block, closing line included,
/// from the rest of the note. Notes without one have an empty header.
#[must_use]
pub fn split_frontmatter(content: &str) -> (&str, &str) {
    let Some(rest) = content.strip_prefix("---\n") else {
        return ("", content);
    };
    if rest.starts_with("---\n") {
        return content.split_at(8);
    }
    match rest.find("\n---\n") {
        Some(index) => content.split_at(index + 9),
        None if rest.ends_with("\n---") => (content, ""),
        None => ("", content),
    }
}

/// Renders properties as a `---` delimited YAML block, trailing newline included.
#[must_use]
pub fn render_frontmatter(properties: &Properties) -> String {
    let mut lines = vec![String::from("---")];
    for (key, value) in properties {
        match value {
            PropertyValue::Scalar(scalar) => lines.push(format!("{key}: {}", yaml_scalar(scalar))),
            PropertyValue::List(items) => {
                lines.push(format!("{key}:"));
                lines.extend(items.iter().map(|item| format!("  - {}", yaml_scalar(item))));
            }
        }
    }
    lines.push(String::from("---"));
    lines.push(String::new());
    lines.join("\n")
}

/// Moves the leading page properties of a note into YAML frontmatter.
///
/// Returns the rewritten note and the keys that were converted. A note without
/// convertible properties comes back unchanged.
#[must_use]
pub fn convert_properties(content: &str) -> (String, Vec<String>) {
    let (properties, body) = extract_properties(content);
    if properties.is_empty() {
        return (content.to_owned(), Vec::new());
    }

    let keys = properties.iter().map(|(key, _)| key.clone()).collect();
    let mut converted = render_frontmatter(&properties);
    converted.push_str(body);
    (converted, keys)
}

fn yaml_scalar(value: &str) -> Cow<'_, str> {
    let needs_quotes = value.is_empty()
        || value.contains(':')
        || value.contains(" #")
        || value.starts_with(|c: char| {
            matches!(
                c,
                '[' | '{' | '#' | '&' | '*' | '!' | '|' | '>' | '\'' | '"' | '%' | '@' | '`'
            )
        })
        || value.starts_with("- ");

    if needs_quotes {
        Cow::Owned(format!(
            "\"{}\"",
            value.replace('\\', "\\\\").replace('"', "\\\"")
        ))
    } else {
        Cow::Borrowed(value)
    }
}
