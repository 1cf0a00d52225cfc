// tests/integration_tests/common.rs
use anyhow::{Result, bail};
use std::fs;
use std::io::Write as _;
use std::path::Path;
use tempfile::TempDir;

pub const BLOCK_ID: &str = "123e4567-e89b-12d3-a456-426614174000";

pub fn create_test_file(dir: &Path, name: &str, content: &str) -> Result<()> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

/// A small graph touching every rewrite stage.
pub fn setup_test_graph() -> Result<TempDir> {
    let graph = TempDir::new()?;
    let root = graph.path();

    create_test_file(
        root,
        "pages/Project Plan.md",
        "title:: Project Plan\ntags:: work, planning\nstatus:: active\n\n\
         - TODO Write outline\n  collapsed:: true\n\
         - Steps\n\t- first\n\t  logseq.order-list-type:: number\n\t- second\n\t  logseq.order-list-type:: number\n\
         - #+BEGIN_WARNING\n  Do not skip review.\n  #+END_WARNING\n",
    )?;
    create_test_file(
        root,
        "pages/Area%2FHealth.md",
        &format!("- Sleep 8 hours\n  id:: {BLOCK_ID}\n- {{{{embed [[Goals]]}}}}\n"),
    )?;
    create_test_file(
        root,
        "journals/2024_01_05.md",
        &format!(
            "- DONE Morning run\n  :LOGBOOK:\n  CLOCK: [2024-01-05 Fri 07:00]\n  :END:\n\
             - See (({BLOCK_ID}))\n- ![map](../assets/map.png){{:height 100, :width 200}}\n\
             - {{{{query (todo now)}}}}\n"
        ),
    )?;
    create_test_file(root, "Inbox.md", "- stray thought\n")?;
    create_test_file(root, "readme.md", "# Not a note\n")?;
    create_test_file(root, "assets/map.png", "png bytes")?;
    create_test_file(root, "assets/sub/diagram.svg", "<svg/>")?;

    Ok(graph)
}

/// Parses the YAML frontmatter at the top of a converted note.
pub fn frontmatter(content: &str) -> Result<serde_yaml_ng::Value> {
    let Some(rest) = content.strip_prefix("---\n") else {
        bail!("note has no frontmatter");
    };
    let Some(end) = rest.find("\n---\n") else {
        bail!("frontmatter is not closed");
    };
    Ok(serde_yaml_ng::from_str(&rest[..end])?)
}
