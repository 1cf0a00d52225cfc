// tests/integration_tests/migration_test.rs
use super::common::{BLOCK_ID, create_test_file, frontmatter, setup_test_graph};
use anyhow::Result;
use seq2vault::core::config::MigrationOptions;
use seq2vault::core::discovery::find_markdown_files;
use seq2vault::core::rules::BlockRefMode;
use seq2vault::core::session::ConversionSession;
use std::fs;
use tempfile::TempDir;

fn options(graph: &TempDir, vault: &TempDir) -> MigrationOptions {
    MigrationOptions::new(graph.path().to_path_buf(), vault.path().join("vault"))
}

#[test]
fn test_full_migration() -> Result<()> {
    let graph = setup_test_graph()?;
    let vault = TempDir::new()?;
    let options = options(&graph, &vault);
    let output = options.output.clone();

    let files = find_markdown_files(graph.path())?;
    let mut session = ConversionSession::new(options);
    let stats = session.migrate(&files)?.clone();

    assert_eq!(stats.files_processed, 4);
    assert_eq!(stats.files_skipped, 0);
    assert_eq!(stats.properties_converted, 3);
    assert_eq!(stats.admonitions_converted, 1);
    assert_eq!(stats.block_refs_flagged, 1);
    assert_eq!(stats.tasks_converted, 2);
    assert!(stats.errors.is_empty());
    assert_eq!(stats.warnings.len(), 1, "one note carries a query");

    let plan = fs::read_to_string(output.join("pages/Project Plan.md"))?;
    let yaml = frontmatter(&plan)?;
    assert_eq!(yaml["title"].as_str(), Some("Project Plan"));
    assert_eq!(yaml["status"].as_str(), Some("active"));
    let tags: Vec<&str> = yaml["tags"]
        .as_sequence()
        .map(|items| items.iter().filter_map(|item| item.as_str()).collect())
        .unwrap_or_default();
    assert_eq!(tags, vec!["work", "planning"]);
    assert!(plan.contains("- [ ] Write outline\n"));
    assert!(plan.contains("\t1. first\n\t2. second\n"));
    assert!(plan.contains("> [!warning]"));
    assert!(plan.contains("> Do not skip review."));
    assert!(!plan.contains("collapsed::"));
    assert!(!plan.contains("#+END_WARNING"));

    let health = fs::read_to_string(output.join("pages/Area-Health.md"))?;
    assert_eq!(health, "- Sleep 8 hours ^123e4567\n- ![[Goals]]\n");

    let journal = fs::read_to_string(output.join("Daily/2024-01-05.md"))?;
    assert!(journal.starts_with("- [x] Morning run\n- See <!-- FIXME"));
    assert!(journal.contains(&format!("(({BLOCK_ID}))")));
    assert!(journal.contains("- ![map](../assets/map.png)\n"));
    assert!(!journal.contains(":LOGBOOK:"));
    assert!(!journal.contains("CLOCK"));

    assert_eq!(fs::read_to_string(output.join("Inbox.md"))?, "- stray thought\n");
    assert!(!output.join("readme.md").exists());
    assert!(output.join("assets/map.png").is_file());
    assert!(output.join("assets/sub/diagram.svg").is_file());
    Ok(())
}

#[test]
fn test_namespaces_and_journal_folder_preferences() -> Result<()> {
    let graph = setup_test_graph()?;
    let vault = TempDir::new()?;
    let options = MigrationOptions {
        namespaces_to_folders: true,
        journals_folder: String::from("Journal"),
        block_refs: BlockRefMode::Remove,
        ..options(&graph, &vault)
    };
    let output = options.output.clone();

    let files = find_markdown_files(graph.path())?;
    let mut session = ConversionSession::new(options);
    let stats = session.migrate(&files)?;

    assert_eq!(stats.block_refs_flagged, 0);
    assert!(output.join("pages/Area/Health.md").is_file());
    let journal = fs::read_to_string(output.join("Journal/2024-01-05.md"))?;
    assert!(journal.contains("- See \n"));
    assert!(!journal.contains("FIXME"));
    Ok(())
}

#[test]
fn test_dry_run_touches_nothing() -> Result<()> {
    let graph = setup_test_graph()?;
    let vault = TempDir::new()?;
    let options = MigrationOptions {
        dry_run: true,
        ..options(&graph, &vault)
    };
    let output = options.output.clone();

    let files = find_markdown_files(graph.path())?;
    let mut session = ConversionSession::new(options);
    let stats = session.migrate(&files)?;

    assert_eq!(stats.files_processed, 4);
    assert_eq!(stats.admonitions_converted, 1);
    assert!(!output.exists());
    Ok(())
}

#[test]
fn test_unreadable_note_does_not_stop_the_run() -> Result<()> {
    let graph = setup_test_graph()?;
    fs::write(graph.path().join("pages/Binary.md"), [0xc3, 0x28, 0xff])?;
    let vault = TempDir::new()?;
    let output = vault.path().join("vault");

    let files = find_markdown_files(graph.path())?;
    let mut session = ConversionSession::new(options(&graph, &vault));
    let stats = session.migrate(&files)?;

    assert_eq!(stats.files_processed, 4);
    assert_eq!(stats.files_skipped, 1);
    assert_eq!(stats.errors.len(), 1);
    assert!(stats.errors[0].contains("Binary.md"));
    assert!(output.join("pages/Project Plan.md").is_file());
    Ok(())
}

#[test]
fn test_collision_is_reported() -> Result<()> {
    let graph = setup_test_graph()?;
    create_test_file(graph.path(), "pages/Area-Health.md", "- flat twin\n")?;
    let vault = TempDir::new()?;

    let files = find_markdown_files(graph.path())?;
    let mut session = ConversionSession::new(options(&graph, &vault));
    let stats = session.migrate(&files)?;

    assert!(
        stats
            .warnings
            .iter()
            .any(|warning| warning.contains("written by an earlier note"))
    );
    Ok(())
}

#[test]
fn test_sessions_keep_separate_statistics() -> Result<()> {
    let graph = setup_test_graph()?;
    let first_vault = TempDir::new()?;
    let second_vault = TempDir::new()?;
    let files = find_markdown_files(graph.path())?;

    let mut first = ConversionSession::new(options(&graph, &first_vault));
    first.migrate(&files)?;
    let mut second = ConversionSession::new(options(&graph, &second_vault));
    second.migrate(&files)?;

    assert_eq!(first.stats(), second.stats());
    assert_eq!(second.stats().files_processed, 4);
    Ok(())
}
