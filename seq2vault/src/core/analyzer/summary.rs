// src/core/analyzer/summary.rs
use std::collections::BTreeSet;

use crate::models::{FilePatterns, PatternSummary, Recommendation, RecommendationAction};

/// How many property types a recommendation lists.
const MAX_LISTED_PROPERTIES: usize = 10;

fn count(len: usize) -> u64 {
    u64::try_from(len).unwrap_or(u64::MAX)
}

/// Merges per-note results into one summary. `failed` is the number of sampled
/// notes that could not be analyzed.
#[must_use]
pub fn merge_patterns(all_patterns: &[FilePatterns], failed: usize) -> PatternSummary {
    let mut summary = PatternSummary {
        files_with_errors: count(failed),
        ..PatternSummary::default()
    };
    let mut wiki_links = BTreeSet::new();
    let mut tags = BTreeSet::new();

    for patterns in all_patterns {
        summary.properties.extend(patterns.properties.iter().cloned());
        summary
            .admonition_types
            .extend(patterns.admonitions.iter().cloned());
        summary.block_ids_count = summary
            .block_ids_count
            .saturating_add(count(patterns.block_ids.len()));
        summary.block_refs_count = summary
            .block_refs_count
            .saturating_add(count(patterns.block_refs.len()));
        if patterns.collapsed > 0 {
            summary.files_with_collapsed = summary.files_with_collapsed.saturating_add(1);
        }
        summary.numbered_lists_count = summary
            .numbered_lists_count
            .saturating_add(patterns.numbered_lists);
        summary.image_sizing_count = summary
            .image_sizing_count
            .saturating_add(patterns.image_sizing);
        wiki_links.extend(patterns.wiki_links.iter().map(String::as_str));
        tags.extend(patterns.tags.iter().map(String::as_str));
        for (state, occurrences) in &patterns.tasks {
            let total = summary.task_counts.entry(state.clone()).or_insert(0);
            *total = total.saturating_add(*occurrences);
        }
        summary.queries_count = summary.queries_count.saturating_add(patterns.queries);
        summary.logbook_count = summary.logbook_count.saturating_add(patterns.logbook);
        summary.embeds_count = summary.embeds_count.saturating_add(patterns.embeds);
        if patterns.namespaces {
            summary.files_with_namespaces = summary.files_with_namespaces.saturating_add(1);
        }
        summary.max_indent_level = summary.max_indent_level.max(patterns.max_indent_level);
        summary.total_bullets = summary.total_bullets.saturating_add(patterns.total_bullets);
    }

    summary.wiki_links_count = count(wiki_links.len());
    summary.unique_tags = tags
        .into_iter()
        .take(PatternSummary::MAX_TAGS)
        .map(str::to_owned)
        .collect();

    if !all_patterns.is_empty() {
        #[expect(clippy::as_conversions, reason = "Precision not critical")]
        #[expect(clippy::cast_precision_loss, reason = "Precision not critical")]
        let average = summary.total_bullets as f64 / all_patterns.len() as f64;
        summary.avg_bullets_per_file = (average * 10.0).round() / 10.0;
    }

    summary
}

/// Advice for the operator, derived from what the sample contained.
#[must_use]
pub fn recommendations(patterns: &PatternSummary) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    if patterns.block_refs_count > 0 {
        recommendations.push(Recommendation {
            feature: "block_references",
            count: Some(patterns.block_refs_count),
            types: None,
            action: RecommendationAction::Ask,
            message: format!(
                "Found {} block references. These require manual mapping. Options: flag for manual fix, or remove.",
                patterns.block_refs_count
            ),
        });
    }

    if patterns.files_with_namespaces > 0 {
        recommendations.push(Recommendation {
            feature: "namespaces",
            count: Some(patterns.files_with_namespaces),
            types: None,
            action: RecommendationAction::Ask,
            message: format!(
                "Found {} files with namespace paths (e.g., Parent/Child). Convert to folder hierarchy?",
                patterns.files_with_namespaces
            ),
        });
    }

    if patterns.queries_count > 0 {
        recommendations.push(Recommendation {
            feature: "queries",
            count: Some(patterns.queries_count),
            types: None,
            action: RecommendationAction::Warn,
            message: format!(
                "Found {} queries. These will be flagged for manual Dataview conversion.",
                patterns.queries_count
            ),
        });
    }

    if !patterns.admonition_types.is_empty() {
        let types: Vec<String> = patterns.admonition_types.iter().cloned().collect();
        recommendations.push(Recommendation {
            feature: "admonitions",
            count: None,
            message: format!(
                "Will convert {} admonition types to callouts: {}",
                types.len(),
                types.join(", ")
            ),
            types: Some(types),
            action: RecommendationAction::Info,
        });
    }

    if !patterns.properties.is_empty() {
        recommendations.push(Recommendation {
            feature: "properties",
            count: None,
            types: Some(
                patterns
                    .properties
                    .iter()
                    .take(MAX_LISTED_PROPERTIES)
                    .cloned()
                    .collect(),
            ),
            action: RecommendationAction::Info,
            message: format!(
                "Will convert {} property types to YAML frontmatter",
                patterns.properties.len()
            ),
        });
    }

    recommendations
}
