// tests/integration_tests/analyzer_test.rs
use super::common::{create_test_file, setup_test_graph};
use anyhow::Result;
use rand::SeedableRng as _;
use rand::rngs::StdRng;
use seq2vault::core::analyzer::generate_report;
use seq2vault::models::RecommendationAction;

#[test]
fn test_report_for_sample_graph() -> Result<()> {
    let graph = setup_test_graph()?;

    let report = generate_report(graph.path(), 50, &mut StdRng::seed_from_u64(11))?;

    assert_eq!(report.file_counts.pages, 2);
    assert_eq!(report.file_counts.journals, 1);
    assert_eq!(report.file_counts.other, 1);
    assert_eq!(report.file_counts.total, 4);
    assert!(report.assets_folder);
    assert_eq!(report.sample_size, 3, "stray notes are not sampled");

    let patterns = &report.patterns;
    assert_eq!(
        patterns.properties.iter().collect::<Vec<_>>(),
        vec!["status", "tags", "title"]
    );
    assert!(patterns.admonition_types.contains("WARNING"));
    assert_eq!(patterns.block_ids_count, 1);
    assert_eq!(patterns.block_refs_count, 1);
    assert_eq!(patterns.files_with_collapsed, 1);
    assert_eq!(patterns.numbered_lists_count, 2);
    assert_eq!(patterns.image_sizing_count, 1);
    assert_eq!(patterns.queries_count, 1);
    assert_eq!(patterns.logbook_count, 1);
    assert_eq!(patterns.embeds_count, 1);
    assert_eq!(patterns.files_with_namespaces, 1);
    assert_eq!(patterns.max_indent_level, 1);
    assert_eq!(patterns.task_counts.get("TODO"), Some(&1));
    assert_eq!(patterns.task_counts.get("DONE"), Some(&1));

    let features: Vec<&str> = report.recommendations.iter().map(|r| r.feature).collect();
    assert_eq!(
        features,
        vec!["block_references", "namespaces", "queries", "admonitions", "properties"]
    );
    assert!(
        report
            .recommendations
            .iter()
            .filter(|r| r.action == RecommendationAction::Ask)
            .all(|r| r.count.is_some())
    );
    Ok(())
}

#[test]
fn test_sample_is_capped_and_reproducible() -> Result<()> {
    let graph = setup_test_graph()?;
    for i in 0..20 {
        create_test_file(graph.path(), &format!("pages/Note {i:02}.md"), "- #idea\n")?;
    }

    let first = generate_report(graph.path(), 5, &mut StdRng::seed_from_u64(99))?;
    let second = generate_report(graph.path(), 5, &mut StdRng::seed_from_u64(99))?;

    assert_eq!(first.sample_size, 5);
    assert_eq!(first.file_counts.pages, 22);
    assert_eq!(first.patterns, second.patterns);
    Ok(())
}

#[test]
fn test_empty_graph() -> Result<()> {
    let graph = tempfile::TempDir::new()?;

    let report = generate_report(graph.path(), 50, &mut StdRng::seed_from_u64(0))?;

    assert_eq!(report.sample_size, 0);
    assert_eq!(report.file_counts.total, 0);
    assert!(!report.assets_folder);
    assert!((report.patterns.avg_bullets_per_file - 0.0).abs() < f64::EPSILON);
    assert!(report.recommendations.is_empty());
    Ok(())
}
