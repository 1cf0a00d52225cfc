// src/core/analyzer/detect.rs
use anyhow::{Context as _, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::Path;

use crate::core::rules::admonitions::ADMONITION_BEGIN_RE;
use crate::core::rules::block_ids::short_id;
use crate::core::rules::block_refs::BLOCK_REF_RE;
use crate::core::rules::cleanup::IMAGE_SIZING_RE;
use crate::core::rules::line::{LineKind, classify};
use crate::core::rules::numbered_lists::ORDER_LIST_KEY;
use crate::core::rules::tasks::TASK_RE;
use crate::models::FilePatterns;

static WIKI_LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[\[([^\]]+)\]\]").expect("valid wiki link regex"));
static HASHTAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:^|[^\w])#([\w-]+)").expect("valid hashtag regex"));

/// Reads a note and detects its outline features.
///
/// # Errors
///
/// Returns an error if the file cannot be read as UTF-8 text.
pub fn analyze_file(path: &Path) -> Result<FilePatterns> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read note: {}", path.display()))?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(analyze_content(&content, &file_name))
}

/// Detects outline features line by line without rewriting anything.
///
/// Task keywords are counted per occurrence here, unlike the rewrite stage.
#[must_use]
pub fn analyze_content(content: &str, file_name: &str) -> FilePatterns {
    let mut patterns = FilePatterns::default();

    for line in content.split('\n') {
        match classify(line) {
            LineKind::Bullet { depth, .. } => {
                patterns.total_bullets = patterns.total_bullets.saturating_add(1);
                patterns.max_indent_level = patterns.max_indent_level.max(depth);
            }
            LineKind::Property { key, value } => match key {
                "collapsed" => patterns.collapsed = patterns.collapsed.saturating_add(1),
                ORDER_LIST_KEY => {
                    patterns.numbered_lists = patterns.numbered_lists.saturating_add(1);
                }
                "id" => patterns.block_ids.push(short_id(value).to_owned()),
                _ => patterns.properties.push(key.to_owned()),
            },
            LineKind::Plain => {}
        }

        if let Some(name) = ADMONITION_BEGIN_RE.captures(line).and_then(|caps| caps.get(1)) {
            patterns.admonitions.push(name.as_str().to_uppercase());
        }

        patterns.block_refs.extend(
            BLOCK_REF_RE
                .captures_iter(line)
                .filter_map(|caps| caps.get(1))
                .map(|m| m.as_str().to_owned()),
        );

        if IMAGE_SIZING_RE.is_match(line) {
            patterns.image_sizing = patterns.image_sizing.saturating_add(1);
        }

        patterns.wiki_links.extend(
            WIKI_LINK_RE
                .captures_iter(line)
                .filter_map(|caps| caps.get(1))
                .map(|m| m.as_str().to_owned()),
        );
        patterns.tags.extend(
            HASHTAG_RE
                .captures_iter(line)
                .filter_map(|caps| caps.get(1))
                .map(|m| m.as_str().to_owned()),
        );

        if let Some(state) = TASK_RE.captures(line).and_then(|caps| caps.get(2)) {
            let count = patterns.tasks.entry(state.as_str().to_owned()).or_insert(0);
            *count = count.saturating_add(1);
        }

        if line.contains("{{query") {
            patterns.queries = patterns.queries.saturating_add(1);
        }
        if line.contains(":LOGBOOK:") {
            patterns.logbook = patterns.logbook.saturating_add(1);
        }
        if line.contains("{{embed") {
            patterns.embeds = patterns.embeds.saturating_add(1);
        }
    }

    patterns.namespaces = file_name.contains("%2F") || file_name.contains("%2f");
    patterns
}
