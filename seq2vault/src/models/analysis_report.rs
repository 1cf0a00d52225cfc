// src/models/analysis_report.rs
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

/// Features detected in one sampled note.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct FilePatterns {
    pub properties: Vec<String>,
    pub admonitions: Vec<String>,
    /// First 8 characters of each declared block id.
    pub block_ids: Vec<String>,
    pub block_refs: Vec<String>,
    pub collapsed: u64,
    pub numbered_lists: u64,
    pub image_sizing: u64,
    pub wiki_links: Vec<String>,
    pub tags: Vec<String>,
    /// Per-occurrence counts keyed by task keyword.
    pub tasks: BTreeMap<String, u64>,
    pub queries: u64,
    pub logbook: u64,
    pub embeds: u64,
    pub namespaces: bool,
    pub max_indent_level: usize,
    pub total_bullets: u64,
}

/// Patterns merged across every successfully analyzed note.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct PatternSummary {
    pub properties: BTreeSet<String>,
    pub admonition_types: BTreeSet<String>,
    pub block_ids_count: u64,
    pub block_refs_count: u64,
    pub files_with_collapsed: u64,
    pub numbered_lists_count: u64,
    pub image_sizing_count: u64,
    pub wiki_links_count: u64,
    /// At most [`PatternSummary::MAX_TAGS`] tags, alphabetically first.
    pub unique_tags: BTreeSet<String>,
    pub task_counts: BTreeMap<String, u64>,
    pub queries_count: u64,
    pub logbook_count: u64,
    pub embeds_count: u64,
    pub files_with_namespaces: u64,
    pub max_indent_level: usize,
    pub total_bullets: u64,
    pub avg_bullets_per_file: f64,
    pub files_with_errors: u64,
}

impl PatternSummary {
    pub const MAX_TAGS: usize = 20;
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FileCounts {
    pub pages: usize,
    pub journals: usize,
    pub other: usize,
    pub total: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationAction {
    /// The operator has to pick a migration option.
    Ask,
    Warn,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub feature: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub types: Option<Vec<String>>,
    pub action: RecommendationAction,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub graph_path: PathBuf,
    pub file_counts: FileCounts,
    pub assets_folder: bool,
    pub sample_size: usize,
    pub patterns: PatternSummary,
    pub recommendations: Vec<Recommendation>,
}
