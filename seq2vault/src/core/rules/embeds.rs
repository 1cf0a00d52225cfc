// src/core/rules/embeds.rs
use once_cell::sync::Lazy;
use regex::Regex;

static PAGE_EMBED_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{\{embed\s+\[\[([^\]]+)\]\]\}\}").expect("valid embed regex")
});

/// `{{embed [[Page]]}}` becomes `![[Page]]`.
#[must_use]
pub fn convert_embeds(content: &str) -> String {
    PAGE_EMBED_RE.replace_all(content, "![[${1}]]").into_owned()
}
