// src/core/test_utils.rs
use anyhow::Result;
use std::fs::{self, File};
use std::io::Write as _;
use std::path::PathBuf;
use tempfile::TempDir;

pub fn create_test_file(dir: &TempDir, name: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.path().join(name);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(&file_path)?;
    file.write_all(content.as_bytes())?;
    Ok(file_path)
}

pub fn setup_test_graph() -> Result<TempDir> {
    let dir = TempDir::new()?;

    create_test_file(
        &dir,
        "pages/Tasks.md",
        "title:: Tasks\ntags:: work, home\n\n- TODO Buy milk\n- DONE Call mum\n",
    )?;
    create_test_file(
        &dir,
        "pages/Parent%2FChild.md",
        "- #+BEGIN_NOTE\n  Namespaced page.\n  #+END_NOTE\n",
    )?;
    create_test_file(
        &dir,
        "journals/2024_01_05.md",
        "- Met with [[Alice]] #meeting\n  id:: 123e4567-e89b-12d3-a456-426614174000\n",
    )?;
    create_test_file(&dir, "Scratch.md", "- loose note\n")?;
    create_test_file(&dir, "README.md", "# Graph readme\n")?;
    create_test_file(&dir, "assets/image.png", "not really a png")?;

    Ok(dir)
}
