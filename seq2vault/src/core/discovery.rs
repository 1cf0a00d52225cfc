// src/core/discovery.rs
use anyhow::{Context as _, Result};
use glob::{MatchOptions, Pattern, glob_with};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::utils::absolute_dir;

pub const PAGES_DIR: &str = "pages";
pub const JOURNALS_DIR: &str = "journals";
pub const ASSETS_DIR: &str = "assets";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoteKind {
    Page,
    Journal,
    /// A stray note at the top level of the graph.
    Other,
}

/// Markdown notes found in a graph, grouped by where they live.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GraphFiles {
    pub pages: Vec<PathBuf>,
    pub journals: Vec<PathBuf>,
    pub other: Vec<PathBuf>,
}

impl GraphFiles {
    #[inline]
    #[must_use]
    pub fn total(&self) -> usize {
        self.pages
            .len()
            .saturating_add(self.journals.len())
            .saturating_add(self.other.len())
    }

    /// Every note paired with its kind: pages, then journals, then stray notes.
    pub fn iter(&self) -> impl Iterator<Item = (NoteKind, &Path)> {
        let pages = self.pages.iter().map(|path| (NoteKind::Page, path.as_path()));
        let journals = self.journals.iter().map(|path| (NoteKind::Journal, path.as_path()));
        let other = self.other.iter().map(|path| (NoteKind::Other, path.as_path()));
        pages.chain(journals).chain(other)
    }

    /// Pages and journals, the population the analyzer samples from.
    #[must_use]
    pub fn outline_notes(&self) -> Vec<PathBuf> {
        self.pages
            .iter()
            .chain(self.journals.iter())
            .cloned()
            .collect()
    }
}

/// Finds the notes of a graph: direct `*.md` children of `pages/` and
/// `journals/`, plus top-level notes other than the readme.
///
/// # Errors
///
/// This function may return an error if:
/// * The current directory cannot be determined for a relative `root`
/// * A directory listing cannot be read
pub fn find_markdown_files(root: &Path) -> Result<GraphFiles> {
    let root = absolute_dir(root)?;

    let files = GraphFiles {
        pages: list_markdown(&root.join(PAGES_DIR))?,
        journals: list_markdown(&root.join(JOURNALS_DIR))?,
        other: list_markdown(&root)?
            .into_iter()
            .filter(|path| !is_readme(path))
            .collect(),
    };

    debug!(
        pages = files.pages.len(),
        journals = files.journals.len(),
        other = files.other.len(),
        "discovered notes in {}",
        root.display()
    );
    Ok(files)
}

fn list_markdown(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let pattern = format!("{}/*.md", Pattern::escape(&dir.to_string_lossy()));
    let options = MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: true,
    };

    let mut files = Vec::new();
    for entry in glob_with(&pattern, options)
        .with_context(|| format!("Invalid note pattern for directory: {}", dir.display()))?
    {
        let path = entry.with_context(|| format!("Failed to list directory: {}", dir.display()))?;
        if path.is_file() {
            files.push(path);
        }
    }

    Ok(files)
}

fn is_readme(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.eq_ignore_ascii_case("readme.md"))
}
