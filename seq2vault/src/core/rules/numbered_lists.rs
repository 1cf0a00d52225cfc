// src/core/rules/numbered_lists.rs
use std::collections::BTreeMap;

use crate::core::rules::line::{LineKind, classify};

pub const ORDER_LIST_KEY: &str = "logseq.order-list-type";

/// Block property that turns the bullet above it into a numbered item.
pub const ORDER_LIST_MARKER: &str = "logseq.order-list-type:: number";

/// Whether `line` declares the bullet above it as a numbered item.
#[must_use]
pub fn is_order_marker(line: &str) -> bool {
    matches!(
        classify(line),
        LineKind::Property { key: ORDER_LIST_KEY, value: "number" }
    )
}

/// Renders bullets flagged with [`ORDER_LIST_MARKER`] as numbered items.
///
/// Counters are kept per tab depth. A numbered item drops the counters of
/// deeper levels before incrementing its own; a plain bullet ends the run at
/// its own depth and everything below it. Marker lines are removed.
#[must_use]
pub fn convert_numbered_lists(content: &str) -> String {
    let lines: Vec<&str> = content.split('\n').collect();
    let mut output: Vec<String> = Vec::with_capacity(lines.len());
    let mut counters: BTreeMap<usize, u64> = BTreeMap::new();

    let mut index = 0;
    while let Some(&line) = lines.get(index) {
        let numbered = lines
            .get(index.saturating_add(1))
            .copied()
            .is_some_and(is_order_marker);

        match classify(line) {
            LineKind::Bullet { depth, text } if numbered => {
                counters.retain(|&level, _| level <= depth);
                let counter = counters.entry(depth).or_insert(0);
                *counter = counter.saturating_add(1);
                output.push(format!("{}{counter}. {text}", "\t".repeat(depth)));
                index = index.saturating_add(2);
                continue;
            }
            LineKind::Bullet { depth, .. } => counters.retain(|&level, _| level < depth),
            LineKind::Property { .. } | LineKind::Plain => {}
        }

        if !is_order_marker(line) {
            output.push(line.to_owned());
        }
        index = index.saturating_add(1);
    }

    output.join("\n")
}
