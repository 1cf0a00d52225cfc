// src/core/config.rs
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::pipeline::RuleOptions;
use crate::core::rules::BlockRefMode;

pub const DEFAULT_JOURNALS_FOLDER: &str = "Daily";

/// Fatal problems with the run configuration, reported before any note is touched.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid {format} in config file {}: {message}", .path.display())]
    Parse {
        path: PathBuf,
        format: &'static str,
        message: String,
    },

    #[error("missing required config field: '{0}'")]
    MissingField(&'static str),

    #[error("unsupported config file format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("source path does not exist: {}", .0.display())]
    SourceMissing(PathBuf),
}

/// The optional `preferences` block of a config file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Preferences {
    pub journals_folder: String,
    pub flatten_top_level: bool,
    pub namespaces_to_folders: bool,
    pub block_refs: BlockRefMode,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            journals_folder: String::from(DEFAULT_JOURNALS_FOLDER),
            flatten_top_level: false,
            namespaces_to_folders: false,
            block_refs: BlockRefMode::Flag,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    source: Option<PathBuf>,
    output: Option<PathBuf>,
    #[serde(default)]
    preferences: Preferences,
}

/// A validated config file with `source` and `output` already resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationConfig {
    pub source: PathBuf,
    pub output: PathBuf,
    pub preferences: Preferences,
}

impl MigrationConfig {
    #[must_use]
    pub fn into_options(self, dry_run: bool) -> MigrationOptions {
        MigrationOptions {
            source: self.source,
            output: self.output,
            journals_folder: self.preferences.journals_folder,
            flatten_top_level: self.preferences.flatten_top_level,
            namespaces_to_folders: self.preferences.namespaces_to_folders,
            block_refs: self.preferences.block_refs,
            dry_run,
        }
    }
}

/// Everything a conversion session needs to know about one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationOptions {
    pub source: PathBuf,
    pub output: PathBuf,
    pub journals_folder: String,
    pub flatten_top_level: bool,
    pub namespaces_to_folders: bool,
    pub block_refs: BlockRefMode,
    /// Convert and count everything but write nothing.
    pub dry_run: bool,
}

impl MigrationOptions {
    #[must_use]
    pub fn new(source: PathBuf, output: PathBuf) -> Self {
        let preferences = Preferences::default();
        Self {
            source,
            output,
            journals_folder: preferences.journals_folder,
            flatten_top_level: preferences.flatten_top_level,
            namespaces_to_folders: preferences.namespaces_to_folders,
            block_refs: preferences.block_refs,
            dry_run: false,
        }
    }

    #[inline]
    #[must_use]
    pub const fn rule_options(&self) -> RuleOptions {
        RuleOptions {
            block_refs: self.block_refs,
            flatten_top_level: self.flatten_top_level,
        }
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::SourceMissing`] when the source folder does not exist.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.source.exists() {
            Ok(())
        } else {
            Err(ConfigError::SourceMissing(self.source.clone()))
        }
    }
}

/// Loads a migration config from JSON, TOML (`.toml`) or YAML (`.yaml`, `.yml`).
///
/// Relative `source` and `output` paths are resolved against the parent of the
/// directory holding the config file, so a config kept in `<graph>/.seq2vault/`
/// can refer to the graph as `.`.
///
/// # Errors
///
/// This function may return an error if:
/// * The file does not exist or cannot be read
/// * The file extension is not a supported format
/// * The content does not parse
/// * `source` or `output` is missing
pub fn load_config(path: &Path) -> Result<MigrationConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }

    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let raw = parse_raw_config(path, &content)?;

    let source = raw.source.ok_or(ConfigError::MissingField("source"))?;
    let output = raw.output.ok_or(ConfigError::MissingField("output"))?;

    let base = path
        .parent()
        .and_then(Path::parent)
        .unwrap_or_else(|| Path::new(""));
    let resolve = |p: PathBuf| if p.is_absolute() { p } else { base.join(p) };

    Ok(MigrationConfig {
        source: resolve(source),
        output: resolve(output),
        preferences: raw.preferences,
    })
}

fn parse_raw_config(path: &Path, content: &str) -> Result<RawConfig, ConfigError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    let parse_error = |format: &'static str, message: String| ConfigError::Parse {
        path: path.to_path_buf(),
        format,
        message,
    };

    match extension.as_deref() {
        None | Some("json") => {
            serde_json::from_str(content).map_err(|e| parse_error("JSON", e.to_string()))
        }
        Some("toml") => toml::from_str(content).map_err(|e| parse_error("TOML", e.to_string())),
        Some("yaml" | "yml") => {
            serde_yaml_ng::from_str(content).map_err(|e| parse_error("YAML", e.to_string()))
        }
        Some(_) => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
    }
}
