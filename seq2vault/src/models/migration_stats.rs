// src/models/migration_stats.rs
use serde::Serialize;
use std::fmt::Display;
use std::path::Path;

use crate::models::ConversionStats;

/// Running totals for one migration run.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct MigrationStats {
    pub files_processed: u64,
    pub files_skipped: u64,
    pub properties_converted: u64,
    pub admonitions_converted: u64,
    pub block_refs_flagged: u64,
    pub tasks_converted: u64,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl MigrationStats {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            files_processed: 0,
            files_skipped: 0,
            properties_converted: 0,
            admonitions_converted: 0,
            block_refs_flagged: 0,
            tasks_converted: 0,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Folds the counters of one successfully converted note into the totals.
    #[inline]
    pub fn absorb(&mut self, file: &ConversionStats) {
        let properties = u64::try_from(file.properties.len()).unwrap_or(u64::MAX);
        self.files_processed = self.files_processed.saturating_add(1);
        self.properties_converted = self.properties_converted.saturating_add(properties);
        self.admonitions_converted = self.admonitions_converted.saturating_add(file.admonitions);
        self.block_refs_flagged = self.block_refs_flagged.saturating_add(file.block_refs_flagged);
        self.tasks_converted = self.tasks_converted.saturating_add(file.task_states);
    }

    #[inline]
    pub fn record_error(&mut self, path: &Path, message: impl Display) {
        self.files_skipped = self.files_skipped.saturating_add(1);
        self.errors.push(format!("{}: {message}", path.display()));
    }

    #[inline]
    pub fn record_warning(&mut self, path: &Path, message: impl Display) {
        self.warnings.push(format!("{}: {message}", path.display()));
    }
}
