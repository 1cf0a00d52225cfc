// src/core/rules/block_refs.rs
use clap::ValueEnum;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::Deserialize;

/// Opening text of the marker left in place of an unresolved block reference.
pub const BLOCK_REF_FLAG_PREFIX: &str = "<!-- FIXME unresolved block reference: ";
pub const BLOCK_REF_FLAG_SUFFIX: &str = " -->";

pub static BLOCK_REF_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(\(([a-f0-9-]{36})\)\)").expect("valid block reference regex"));

/// A bare reference, or one already wrapped in a flag marker.
static FLAGGED_OR_BARE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?P<flagged>{}\(\([a-f0-9-]{{36}}\)\){})|\(\([a-f0-9-]{{36}}\)\)",
        regex::escape(BLOCK_REF_FLAG_PREFIX),
        regex::escape(BLOCK_REF_FLAG_SUFFIX)
    ))
    .expect("valid flagged block reference regex")
});

/// What to do with `((uuid))` block references.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockRefMode {
    /// Replace each reference with a visible marker for manual repair.
    #[default]
    Flag,
    /// Delete references outright.
    Remove,
}

#[must_use]
pub fn flag_marker(reference: &str) -> String {
    format!("{BLOCK_REF_FLAG_PREFIX}{reference}{BLOCK_REF_FLAG_SUFFIX}")
}

/// Flags or removes block references. Returns the new text and the number of
/// references flagged; references that already carry a marker are not counted.
#[must_use]
pub fn handle_block_refs(content: &str, mode: BlockRefMode) -> (String, u64) {
    match mode {
        BlockRefMode::Remove => (FLAGGED_OR_BARE_RE.replace_all(content, "").into_owned(), 0),
        BlockRefMode::Flag => {
            let mut flagged: u64 = 0;
            let converted = FLAGGED_OR_BARE_RE.replace_all(content, |caps: &Captures<'_>| {
                let matched = caps.get(0).map_or("", |m| m.as_str());
                if caps.name("flagged").is_some() {
                    return matched.to_owned();
                }
                flagged = flagged.saturating_add(1);
                flag_marker(matched)
            });
            (converted.into_owned(), flagged)
        }
    }
}
