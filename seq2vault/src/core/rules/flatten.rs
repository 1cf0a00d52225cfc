// src/core/rules/flatten.rs
use crate::core::rules::line::{LineKind, classify};

/// Turns top-level bullets into paragraphs and pulls their children up one tab.
#[must_use]
pub fn flatten_top_level(content: &str) -> String {
    let mut output: Vec<&str> = Vec::new();
    let mut in_flattened_section = false;

    for line in content.split('\n') {
        if let LineKind::Bullet { depth: 0, text } = classify(line) {
            output.push(text);
            output.push("");
            in_flattened_section = true;
            continue;
        }

        match line.strip_prefix('\t') {
            Some(dedented) if in_flattened_section => output.push(dedented),
            _ => output.push(line),
        }
    }

    output.join("\n")
}
