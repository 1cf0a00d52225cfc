// src/core/rules/block_ids.rs
use once_cell::sync::Lazy;
use regex::Regex;

static BLOCK_ID_LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*id::\s*([a-f0-9-]{36})\s*$").expect("valid block id regex")
});

/// Length of the anchor kept from a block id.
pub const SHORT_ID_LEN: usize = 8;

/// Returns the anchor form of a block id, e.g. `123e4567`.
#[must_use]
pub fn short_id(block_id: &str) -> &str {
    block_id.get(..SHORT_ID_LEN).unwrap_or(block_id)
}

/// Replaces standalone `id:: <uuid>` lines with a ` ^shortid` anchor on the
/// line above. An id line with nothing above it is dropped.
#[must_use]
pub fn relocate_block_ids(content: &str) -> String {
    let mut output: Vec<String> = Vec::new();

    for line in content.split('\n') {
        let Some(block_id) = BLOCK_ID_LINE_RE
            .captures(line)
            .and_then(|caps| caps.get(1))
        else {
            output.push(line.to_owned());
            continue;
        };

        if let Some(previous) = output.last_mut() {
            previous.truncate(previous.trim_end().len());
            previous.push_str(" ^");
            previous.push_str(short_id(block_id.as_str()));
        }
    }

    output.join("\n")
}
