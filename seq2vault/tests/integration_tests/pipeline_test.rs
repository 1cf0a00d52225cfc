// tests/integration_tests/pipeline_test.rs
use super::common::{BLOCK_ID, frontmatter};
use anyhow::Result;
use seq2vault::core::paths::{journal_file_name, page_relative_path};
use seq2vault::core::rules::BlockRefMode;
use seq2vault::{RuleOptions, convert_note};
use std::path::PathBuf;

const OUTLINE: &str = "\
title:: Reading List
tags:: books, to-read
- TODO Finish [[Dune]]
  collapsed:: true
  :LOGBOOK:
  CLOCK: [2024-02-01 Thu 20:00]
  :END:
- DOING Notes on chapter 3
  id:: 123e4567-e89b-12d3-a456-426614174000
\t- #+BEGIN_QUOTE
\t  Fear is the mind-killer.
\t  #+END_QUOTE
- Ranked
\t- first
\t  logseq.order-list-type:: number
\t- second
\t  logseq.order-list-type:: number
- back to ((123e4567-e89b-12d3-a456-426614174000))
- {{embed [[Quotes]]}} ![cover](cover.png){:height 300, :width 200}



- WAITING on library hold
";

#[test]
fn test_pipeline_is_idempotent() {
    for options in [
        RuleOptions::default(),
        RuleOptions {
            block_refs: BlockRefMode::Remove,
            flatten_top_level: false,
        },
    ] {
        let once = convert_note(OUTLINE, &options);
        let twice = convert_note(&once.content, &options);

        assert_eq!(twice.content, once.content);
        assert!(twice.stats.properties.is_empty());
        assert_eq!(twice.stats.admonitions, 0);
        assert_eq!(twice.stats.task_states, 0);
        assert_eq!(twice.stats.block_refs_flagged, 0);
    }
}

#[test]
fn test_converted_outline_has_no_outliner_syntax_left() {
    let content = convert_note(OUTLINE, &RuleOptions::default()).content;

    for token in [
        "::",
        "#+BEGIN_",
        "#+END_",
        ":LOGBOOK:",
        "{:height",
        "{{embed",
        "TODO ",
        "DOING ",
        "WAITING ",
    ] {
        assert!(!content.contains(token), "{token:?} survived conversion");
    }
    assert!(!content.contains("\n\n\n"));
    assert!(content.ends_with('\n'));
}

#[test]
fn test_outline_conversion_details() -> Result<()> {
    let conversion = convert_note(OUTLINE, &RuleOptions::default());
    let content = &conversion.content;

    let yaml = frontmatter(content)?;
    assert_eq!(yaml["title"].as_str(), Some("Reading List"));
    assert_eq!(yaml["tags"][1].as_str(), Some("to-read"));

    assert!(content.contains("- [ ] Finish [[Dune]]\n"));
    assert!(content.contains("- [/] Notes on chapter 3 ^123e4567\n"));
    assert!(content.contains("\t- > [!quote]\n\t> Fear is the mind-killer.\n"));
    assert!(content.contains("\t1. first\n\t2. second\n"));
    assert!(content.contains(&format!(
        "- back to <!-- FIXME unresolved block reference: (({BLOCK_ID})) -->"
    )));
    assert!(content.contains("- ![[Quotes]] ![cover](cover.png)\n"));
    assert!(content.ends_with("\n\n- [!] on library hold\n"));

    assert_eq!(conversion.stats.properties, vec!["title", "tags"]);
    assert_eq!(conversion.stats.admonitions, 1);
    assert_eq!(conversion.stats.block_refs_flagged, 1);
    assert_eq!(conversion.stats.task_states, 3);
    Ok(())
}

#[test]
fn test_frontmatter_stays_valid_yaml() -> Result<()> {
    let note = "tags:: TODO list, reading\nalias:: DONE deal\n\n- TODO start\n";

    let content = convert_note(note, &RuleOptions::default()).content;

    let yaml = frontmatter(&content)?;
    assert_eq!(yaml["tags"][0].as_str(), Some("TODO list"));
    assert_eq!(yaml["tags"][1].as_str(), Some("reading"));
    assert_eq!(yaml["alias"].as_str(), Some("DONE deal"));
    assert!(content.ends_with("---\n\n- [ ] start\n"));
    Ok(())
}

#[test]
fn test_bullet_mentioning_list_marker_survives() {
    let note = "- a\n- see `logseq.order-list-type:: number` in docs\n- c\n";

    let content = convert_note(note, &RuleOptions::default()).content;

    assert_eq!(content, note);
}

#[test]
fn test_leading_blank_line_is_idempotent() {
    let once = convert_note("\ntitle:: X\n- body\n", &RuleOptions::default()).content;
    let twice = convert_note(&once, &RuleOptions::default()).content;

    assert_eq!(once, "---\ntitle: X\n---\n- body\n");
    assert_eq!(twice, once);
}

#[test]
fn test_repeated_task_keyword_counts_once() {
    let conversion = convert_note("- TODO a\n- TODO b\n- DONE c\n", &RuleOptions::default());

    assert_eq!(conversion.content, "- [ ] a\n- [ ] b\n- [x] c\n");
    assert_eq!(conversion.stats.task_states, 2);
}

#[test]
fn test_unknown_admonition_becomes_note_callout() {
    let note = "#+BEGIN_CUSTOM\nSomething.\n#+END_CUSTOM";

    let content = convert_note(note, &RuleOptions::default()).content;

    assert_eq!(content, "> [!note]\n> Something.\n");
}

#[test]
fn test_flatten_top_level_bullets() {
    let options = RuleOptions {
        flatten_top_level: true,
        ..RuleOptions::default()
    };

    let note = "- Morning\n\t- coffee\n\t\t- two cups\n- Evening\n\t- walk\n";

    let content = convert_note(note, &options).content;

    assert_eq!(
        content,
        "Morning\n\n- coffee\n\t- two cups\nEvening\n\n- walk\n"
    );
}

#[test]
fn test_destination_names() {
    assert_eq!(
        page_relative_path("Parent%2FChild.md", true),
        PathBuf::from("Parent").join("Child.md")
    );
    assert_eq!(
        page_relative_path("Parent%2FChild.md", false),
        PathBuf::from("Parent-Child.md")
    );
    assert_eq!(journal_file_name("2024_01_05.md"), "2024-01-05.md");
    assert_eq!(journal_file_name("meeting notes.md"), "meeting notes.md");
}
