// src/core/output.rs
use anyhow::{Context as _, Result};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use crate::core::discovery::ASSETS_DIR;

/// Writes a converted note, creating parent folders and replacing any
/// existing file.
///
/// # Errors
///
/// This function may return an error if:
/// * A parent directory cannot be created
/// * The file cannot be written
pub fn write_note(destination: &Path, content: &str) -> Result<()> {
    if let Some(parent) = destination.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(destination, content)
        .with_context(|| format!("Failed to write note: {}", destination.display()))
}

/// Copies `<source>/assets` to `<output>/assets`, replacing what was there.
///
/// Returns the number of files copied; a graph without assets copies nothing.
///
/// # Errors
///
/// This function may return an error if:
/// * The existing destination assets folder cannot be removed
/// * A directory cannot be traversed or created
/// * A file cannot be copied
pub fn copy_assets(source_root: &Path, output_root: &Path) -> Result<u64> {
    let source = source_root.join(ASSETS_DIR);
    if !source.is_dir() {
        return Ok(0);
    }

    let destination = output_root.join(ASSETS_DIR);
    if destination.exists() {
        fs::remove_dir_all(&destination).with_context(|| {
            format!("Failed to remove existing assets: {}", destination.display())
        })?;
    }

    let mut copied: u64 = 0;
    for entry in WalkDir::new(&source).follow_links(true) {
        let entry = entry?;
        let relative = entry.path().strip_prefix(&source)?;
        let target = destination.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)
                .with_context(|| format!("Failed to create directory: {}", target.display()))?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &target)
                .with_context(|| format!("Failed to copy asset: {}", entry.path().display()))?;
            copied = copied.saturating_add(1);
        }
    }

    Ok(copied)
}
