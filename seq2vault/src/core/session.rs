// src/core/session.rs
use anyhow::{Context as _, Result};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::core::config::MigrationOptions;
use crate::core::discovery::{ASSETS_DIR, GraphFiles, NoteKind};
use crate::core::output::{copy_assets, write_note};
use crate::core::paths::destination_path;
use crate::core::pipeline::{Conversion, convert_note};
use crate::models::MigrationStats;

/// Drives notes through the rewrite pipeline and keeps the run's totals.
///
/// Each session owns its statistics, so independent sessions never share state.
#[derive(Debug)]
pub struct ConversionSession {
    options: MigrationOptions,
    stats: MigrationStats,
    destinations: HashSet<PathBuf>,
}

impl ConversionSession {
    #[must_use]
    pub fn new(options: MigrationOptions) -> Self {
        Self {
            options,
            stats: MigrationStats::new(),
            destinations: HashSet::new(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn options(&self) -> &MigrationOptions {
        &self.options
    }

    #[inline]
    #[must_use]
    pub const fn stats(&self) -> &MigrationStats {
        &self.stats
    }

    #[inline]
    #[must_use]
    pub fn destination_for(&self, kind: NoteKind, source: &Path) -> PathBuf {
        destination_path(&self.options, kind, source)
    }

    /// Converts every discovered note, then copies the assets folder.
    ///
    /// A note that fails to read, convert or write is recorded in the error
    /// list and the run moves on to the next one.
    ///
    /// # Errors
    ///
    /// Returns an error if the output root cannot be created.
    pub fn migrate(&mut self, files: &GraphFiles) -> Result<&MigrationStats> {
        info!(
            "Starting migration from {} to {}",
            self.options.source.display(),
            self.options.output.display()
        );

        if !self.options.dry_run {
            fs::create_dir_all(&self.options.output).with_context(|| {
                format!("Failed to create output directory: {}", self.options.output.display())
            })?;
        }

        for (kind, source) in files.iter() {
            let destination = self.destination_for(kind, source);
            self.convert_file(source, &destination);
        }

        if !self.options.dry_run {
            match copy_assets(&self.options.source, &self.options.output) {
                Ok(0) => {}
                Ok(copied) => info!("Copied {copied} asset files"),
                Err(err) => {
                    let assets = self.options.source.join(ASSETS_DIR);
                    warn!("Failed to copy assets: {err:#}");
                    self.stats.record_error(&assets, format!("{err:#}"));
                }
            }
        }

        Ok(&self.stats)
    }

    /// Converts one note to `destination`, returning whether it succeeded.
    pub fn convert_file(&mut self, source: &Path, destination: &Path) -> bool {
        if !self.destinations.insert(destination.to_path_buf()) {
            self.stats.record_warning(
                source,
                format!("overwrites {} written by an earlier note", destination.display()),
            );
        }

        match self.try_convert(source, destination) {
            Ok(conversion) => {
                if conversion.stats.queries > 0 {
                    self.stats.record_warning(
                        source,
                        format!(
                            "{} queries need manual conversion to Dataview",
                            conversion.stats.queries
                        ),
                    );
                }
                self.stats.absorb(&conversion.stats);
                true
            }
            Err(err) => {
                warn!("Skipping {}: {err:#}", source.display());
                self.stats.record_error(source, format!("{err:#}"));
                false
            }
        }
    }

    fn try_convert(&self, source: &Path, destination: &Path) -> Result<Conversion> {
        let content = fs::read_to_string(source)
            .with_context(|| format!("Failed to read note: {}", source.display()))?;
        let conversion = convert_note(&content, &self.options.rule_options());

        if self.options.dry_run {
            if conversion.content != content {
                debug!("Would convert: {}", source.display());
            }
        } else {
            write_note(destination, &conversion.content)?;
            debug!("Converted {} -> {}", source.display(), destination.display());
        }

        Ok(conversion)
    }
}
