// src/report.rs
//! Terminal output for migration runs and analysis reports.

use anyhow::{Context as _, Result};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::core::discovery::GraphFiles;
use crate::core::pipeline::{RuleOptions, convert_note};
use crate::models::{AnalysisReport, MigrationStats, RecommendationAction};
use crate::utils::head_lines;

/// Lines shown per side in a dry-run preview.
pub const PREVIEW_LINES: usize = 40;
/// Errors or warnings listed in full before the summary collapses the rest.
pub const MAX_LISTED_ENTRIES: usize = 10;

const RULE: &str = "============================================================";

/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_migration_summary(
    out: &mut impl Write,
    stats: &MigrationStats,
    output: &Path,
    dry_run: bool,
) -> io::Result<()> {
    writeln!(out, "\n{RULE}")?;
    writeln!(out, "Migration Summary")?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "Files processed:       {}", stats.files_processed)?;
    writeln!(out, "Files skipped:         {}", stats.files_skipped)?;
    writeln!(out, "Properties converted:  {}", stats.properties_converted)?;
    writeln!(out, "Admonitions converted: {}", stats.admonitions_converted)?;
    writeln!(out, "Block refs flagged:    {}", stats.block_refs_flagged)?;
    writeln!(out, "Tasks converted:       {}", stats.tasks_converted)?;

    write_entries(out, "Errors", &stats.errors)?;
    write_entries(out, "Warnings", &stats.warnings)?;

    if dry_run {
        writeln!(out, "\nDry run complete. Run without --dry-run to execute migration.")?;
    } else {
        writeln!(out, "\nMigration complete! Output: {}", output.display())?;
        writeln!(out, "\nNext steps:")?;
        writeln!(out, "   1. Open Obsidian")?;
        writeln!(out, "   2. Click 'Open folder as vault'")?;
        writeln!(out, "   3. Select: {}", output.display())?;
        writeln!(
            out,
            "   4. Install recommended plugins: Calendar, Periodic Notes, Outliner, Dataview"
        )?;
    }
    Ok(())
}

fn write_entries(out: &mut impl Write, label: &str, entries: &[String]) -> io::Result<()> {
    if entries.is_empty() {
        return Ok(());
    }

    writeln!(out, "\n{label} ({}):", entries.len())?;
    for entry in entries.iter().take(MAX_LISTED_ENTRIES) {
        writeln!(out, "   {entry}")?;
    }
    if entries.len() > MAX_LISTED_ENTRIES {
        writeln!(
            out,
            "   ... and {} more",
            entries.len().saturating_sub(MAX_LISTED_ENTRIES)
        )?;
    }
    Ok(())
}

/// # Errors
///
/// Returns an error if the statistics cannot be serialized or written.
pub fn write_migration_json(out: &mut impl Write, stats: &MigrationStats) -> Result<()> {
    let json =
        serde_json::to_string_pretty(stats).context("Failed to serialize migration statistics")?;
    writeln!(out, "{json}")?;
    Ok(())
}

/// Shows the first `count` notes (pages first, then journals) before and
/// after conversion.
///
/// # Errors
///
/// This function may return an error if:
/// * A sampled note cannot be read
/// * Writing to `out` fails
pub fn write_sample_previews(
    out: &mut impl Write,
    files: &GraphFiles,
    options: &RuleOptions,
    count: usize,
) -> Result<()> {
    for path in files.pages.iter().chain(files.journals.iter()).take(count) {
        let original = fs::read_to_string(path)
            .with_context(|| format!("Failed to read sample note: {}", path.display()))?;
        let converted = convert_note(&original, options).content;
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        writeln!(out, "\n{RULE}")?;
        writeln!(out, "Sample: {name}")?;
        writeln!(out, "{RULE}")?;
        write_preview(out, "ORIGINAL", &original)?;
        write_preview(out, "CONVERTED", &converted)?;
    }
    Ok(())
}

fn write_preview(out: &mut impl Write, label: &str, text: &str) -> io::Result<()> {
    let (lines, total) = head_lines(text, PREVIEW_LINES);
    writeln!(out, "\n{label} (first {PREVIEW_LINES} lines):")?;
    writeln!(out, "----------------------------------------")?;
    writeln!(out, "{}", lines.join("\n"))?;
    if total > PREVIEW_LINES {
        writeln!(out, "... ({total} total lines)")?;
    }
    Ok(())
}

/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_analysis(out: &mut impl Write, report: &AnalysisReport) -> io::Result<()> {
    let counts = &report.file_counts;
    let patterns = &report.patterns;

    writeln!(out, "\nGraph Analysis: {}", report.graph_path.display())?;
    writeln!(out, "{RULE}")?;

    writeln!(out, "\nFiles found:")?;
    writeln!(out, "   Pages:    {}", counts.pages)?;
    writeln!(out, "   Journals: {}", counts.journals)?;
    writeln!(out, "   Other:    {}", counts.other)?;
    writeln!(out, "   Total:    {}", counts.total)?;
    writeln!(out, "   Assets:   {}", if report.assets_folder { "yes" } else { "no" })?;

    writeln!(out, "\nAnalyzed {} files", report.sample_size)?;
    if patterns.files_with_errors > 0 {
        writeln!(out, "   ({} could not be read)", patterns.files_with_errors)?;
    }

    let admonitions: Vec<&str> = patterns.admonition_types.iter().map(String::as_str).collect();
    let admonition_names = if admonitions.is_empty() {
        String::from("none")
    } else {
        admonitions.join(", ")
    };

    writeln!(out, "\nDetected patterns:")?;
    writeln!(out, "   Properties:      {} types", patterns.properties.len())?;
    writeln!(
        out,
        "   Admonitions:     {} types ({admonition_names})",
        admonitions.len()
    )?;
    writeln!(out, "   Block IDs:       {}", patterns.block_ids_count)?;
    writeln!(out, "   Block refs:      {}", patterns.block_refs_count)?;
    writeln!(out, "   Collapsed:       {} files", patterns.files_with_collapsed)?;
    writeln!(out, "   Numbered lists:  {}", patterns.numbered_lists_count)?;
    writeln!(out, "   Image sizing:    {}", patterns.image_sizing_count)?;
    writeln!(out, "   Wiki links:      {}", patterns.wiki_links_count)?;
    writeln!(out, "   Tags:            {}", patterns.unique_tags.len())?;
    writeln!(out, "   Queries:         {}", patterns.queries_count)?;
    writeln!(out, "   Logbook blocks:  {}", patterns.logbook_count)?;
    writeln!(out, "   Embeds:          {}", patterns.embeds_count)?;
    writeln!(out, "   Namespaces:      {} files", patterns.files_with_namespaces)?;
    writeln!(out, "   Max indent:      {} levels", patterns.max_indent_level)?;
    writeln!(out, "   Avg bullets:     {}/file", patterns.avg_bullets_per_file)?;

    if !patterns.task_counts.is_empty() {
        writeln!(out, "\nTask states:")?;
        for (state, count) in &patterns.task_counts {
            writeln!(out, "   {state}: {count}")?;
        }
    }

    if !report.recommendations.is_empty() {
        writeln!(out, "\nRecommendations:")?;
        for recommendation in &report.recommendations {
            let marker = match recommendation.action {
                RecommendationAction::Ask => "?",
                RecommendationAction::Warn => "!",
                RecommendationAction::Info => "-",
            };
            writeln!(out, "   {marker} {}", recommendation.message)?;
        }
    }

    writeln!(out)
}

/// # Errors
///
/// Returns an error if the report cannot be serialized or written.
pub fn write_analysis_json(out: &mut impl Write, report: &AnalysisReport) -> Result<()> {
    let json =
        serde_json::to_string_pretty(report).context("Failed to serialize analysis report")?;
    writeln!(out, "{json}")?;
    Ok(())
}
