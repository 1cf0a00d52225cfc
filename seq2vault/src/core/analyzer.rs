// src/core/analyzer.rs
//! Samples notes from a graph and reports which outline features need
//! attention before migrating.

mod detect;
mod summary;

pub use detect::{analyze_content, analyze_file};
pub use summary::{merge_patterns, recommendations};

use anyhow::Result;
use rand::Rng;
use rand::seq::index;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::core::discovery::{ASSETS_DIR, find_markdown_files};
use crate::models::{AnalysisReport, FileCounts};

pub const DEFAULT_SAMPLE_SIZE: usize = 50;

/// Picks up to `size` distinct files uniformly at random, keeping their
/// original order. Every file is returned when there are fewer than `size`.
pub fn sample_files<R: Rng + ?Sized>(files: &[PathBuf], size: usize, rng: &mut R) -> Vec<PathBuf> {
    if files.len() <= size {
        return files.to_vec();
    }

    let mut picked = index::sample(rng, files.len(), size).into_vec();
    picked.sort_unstable();
    picked
        .into_iter()
        .filter_map(|i| files.get(i).cloned())
        .collect()
}

/// Analyzes a random sample of the graph's pages and journals.
///
/// Notes that cannot be read are counted in `files_with_errors` and do not
/// stop the analysis.
///
/// # Errors
///
/// This function may return an error if:
/// * The graph's folders cannot be listed
pub fn generate_report<R: Rng + ?Sized>(
    graph: &Path,
    sample_size: usize,
    rng: &mut R,
) -> Result<AnalysisReport> {
    let files = find_markdown_files(graph)?;
    let candidates = files.outline_notes();
    let sample = sample_files(&candidates, sample_size, rng);
    debug!(
        candidates = candidates.len(),
        sampled = sample.len(),
        "analyzing {}",
        graph.display()
    );

    let mut analyzed = Vec::with_capacity(sample.len());
    let mut failed = 0_usize;
    for path in &sample {
        match analyze_file(path) {
            Ok(patterns) => analyzed.push(patterns),
            Err(err) => {
                warn!("{err:#}");
                failed = failed.saturating_add(1);
            }
        }
    }

    let patterns = merge_patterns(&analyzed, failed);
    let recommendations = recommendations(&patterns);

    Ok(AnalysisReport {
        graph_path: graph.to_path_buf(),
        file_counts: FileCounts {
            pages: files.pages.len(),
            journals: files.journals.len(),
            other: files.other.len(),
            total: files.total(),
        },
        assets_folder: graph.join(ASSETS_DIR).is_dir(),
        sample_size: sample.len(),
        patterns,
        recommendations,
    })
}
