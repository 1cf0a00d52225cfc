// src/core/paths.rs
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Path, PathBuf};

use crate::core::config::MigrationOptions;
use crate::core::discovery::NoteKind;

static JOURNAL_NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{4})_(\d{2})_(\d{2})(\.[^./\\]+)$").expect("valid journal name regex")
});

/// Folder that pages land in under the output root.
pub const PAGES_FOLDER: &str = "pages";

/// Decodes the `%2F` namespace separator used in page file names.
#[must_use]
pub fn decode_namespace(file_name: &str) -> String {
    file_name.replace("%2F", "/").replace("%2f", "/")
}

/// `2024_01_05.md` becomes `2024-01-05.md`; anything else is returned as-is.
#[must_use]
pub fn journal_file_name(file_name: &str) -> String {
    JOURNAL_NAME_RE.captures(file_name).map_or_else(
        || file_name.to_owned(),
        |caps| {
            let part = |index| caps.get(index).map_or("", |m| m.as_str());
            format!("{}-{}-{}{}", part(1), part(2), part(3), part(4))
        },
    )
}

/// Path of a page relative to the pages folder.
///
/// With `namespaces_to_folders`, `Parent%2FChild.md` becomes `Parent/Child.md`.
/// Otherwise separators are replaced by hyphens: `Parent-Child.md`.
#[must_use]
pub fn page_relative_path(file_name: &str, namespaces_to_folders: bool) -> PathBuf {
    let decoded = decode_namespace(file_name);

    if namespaces_to_folders && decoded.contains('/') {
        if let Some((stem, extension)) = decoded.rsplit_once('.') {
            let mut segments: Vec<&str> = stem
                .split('/')
                .filter(|segment| !matches!(*segment, "" | "." | ".."))
                .collect();
            if let Some(name) = segments.pop() {
                let mut path: PathBuf = segments.iter().collect();
                path.push(format!("{name}.{extension}"));
                return path;
            }
        }
    }

    PathBuf::from(decoded.replace('/', "-"))
}

/// Where a discovered note is written, given the run's options.
#[must_use]
pub fn destination_path(options: &MigrationOptions, kind: NoteKind, source: &Path) -> PathBuf {
    let file_name = source
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    match kind {
        NoteKind::Page => options
            .output
            .join(PAGES_FOLDER)
            .join(page_relative_path(&file_name, options.namespaces_to_folders)),
        NoteKind::Journal => options
            .output
            .join(&options.journals_folder)
            .join(journal_file_name(&file_name)),
        NoteKind::Other => options
            .output
            .join(page_relative_path(&file_name, false)),
    }
}
