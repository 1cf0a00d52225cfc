// src/utils.rs
use anyhow::Result;
use std::env;
use std::path::{Path, PathBuf};

/// Resolves `dir` against the current directory when it is relative.
///
/// # Errors
///
/// Returns an error if the current directory cannot be determined.
pub fn absolute_dir(dir: &Path) -> Result<PathBuf> {
    if dir.is_absolute() {
        Ok(dir.to_path_buf())
    } else {
        Ok(env::current_dir()?.join(dir))
    }
}

/// The first `limit` lines of `text`, and how many lines it has in total.
#[must_use]
pub fn head_lines(text: &str, limit: usize) -> (Vec<&str>, usize) {
    let total = text.split('\n').count();
    (text.split('\n').take(limit).collect(), total)
}
