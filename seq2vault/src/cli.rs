// src/cli.rs
use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use rand::SeedableRng as _;
use rand::rngs::StdRng;
use std::io::{self, Write as _};
use std::path::PathBuf;
use tracing::warn;

use crate::core::analyzer::{DEFAULT_SAMPLE_SIZE, generate_report};
use crate::core::config::{ConfigError, DEFAULT_JOURNALS_FOLDER, MigrationOptions, load_config};
use crate::core::discovery::{JOURNALS_DIR, PAGES_DIR, find_markdown_files};
use crate::core::rules::BlockRefMode;
use crate::core::session::ConversionSession;
use crate::report::{
    write_analysis, write_analysis_json, write_migration_json, write_migration_summary,
    write_sample_previews,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Log progress to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert a graph into a vault
    Migrate(MigrateArgs),
    /// Sample a graph and report which features need attention
    Analyze(AnalyzeArgs),
}

#[derive(clap::Args, Debug)]
pub struct MigrateArgs {
    /// Graph folder holding pages/ and journals/
    #[arg(required_unless_present = "config")]
    pub source: Option<PathBuf>,

    /// Vault folder to write into
    #[arg(short, long, required_unless_present = "config")]
    pub output: Option<PathBuf>,

    /// JSON, TOML or YAML file with source, output and preferences
    #[arg(short, long, conflicts_with_all = ["source", "output"])]
    pub config: Option<PathBuf>,

    /// Convert and report without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Vault folder that receives journal notes
    #[arg(long, default_value = DEFAULT_JOURNALS_FOLDER)]
    pub journals_folder: String,

    /// Promote top-level bullets to plain paragraphs
    #[arg(long)]
    pub flatten_top_level: bool,

    /// Turn namespaced pages (a%2Fb.md) into nested folders
    #[arg(long)]
    pub namespaces_to_folders: bool,

    /// What to do with ((uuid)) block references
    #[arg(long, value_enum, default_value_t = BlockRefMode::Flag)]
    pub block_refs: BlockRefMode,

    /// Number of sample notes to preview in dry-run mode
    #[arg(long, default_value = "2")]
    pub samples: usize,

    /// Print the run statistics as JSON instead of a summary
    #[arg(long)]
    pub json: bool,
}

impl MigrateArgs {
    /// Builds run options from the config file if one was given, otherwise
    /// from the command-line flags.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be loaded or `source` or
    /// `output` is missing.
    pub fn options(&self) -> Result<MigrationOptions, ConfigError> {
        if let Some(path) = &self.config {
            return Ok(load_config(path)?.into_options(self.dry_run));
        }

        let source = self.source.clone().ok_or(ConfigError::MissingField("source"))?;
        let output = self.output.clone().ok_or(ConfigError::MissingField("output"))?;
        Ok(MigrationOptions {
            journals_folder: self.journals_folder.clone(),
            flatten_top_level: self.flatten_top_level,
            namespaces_to_folders: self.namespaces_to_folders,
            block_refs: self.block_refs,
            dry_run: self.dry_run,
            ..MigrationOptions::new(source, output)
        })
    }
}

#[derive(clap::Args, Debug)]
pub struct AnalyzeArgs {
    /// Graph folder to analyze
    pub graph: PathBuf,

    /// Maximum number of notes to sample
    #[arg(short = 'n', long, default_value_t = DEFAULT_SAMPLE_SIZE)]
    pub sample_size: usize,

    /// Seed for a reproducible sample
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Runs the selected subcommand.
///
/// # Errors
///
/// This function may return an error if:
/// * The configuration is invalid or the source folder is missing
/// * The output folder cannot be created
/// * Writing the report to stdout fails
pub fn run(args: Args) -> Result<()> {
    match args.command {
        Command::Migrate(migrate) => run_migrate(&migrate),
        Command::Analyze(analyze) => run_analyze(&analyze),
    }
}

fn run_migrate(args: &MigrateArgs) -> Result<()> {
    let options = args.options()?;
    options.validate()?;

    if !options.source.join(PAGES_DIR).is_dir() && !options.source.join(JOURNALS_DIR).is_dir() {
        warn!(
            "No {PAGES_DIR}/ or {JOURNALS_DIR}/ folder found in {}. Is this an outliner graph?",
            options.source.display()
        );
    }

    let files = find_markdown_files(&options.source)?;
    let mut stdout = io::stdout().lock();

    if options.dry_run && !args.json {
        writeln!(stdout, "\nDRY RUN MODE - No files will be written")?;
        if let Err(err) =
            write_sample_previews(&mut stdout, &files, &options.rule_options(), args.samples)
        {
            warn!("Failed to preview samples: {err:#}");
        }
    }

    let dry_run = options.dry_run;
    let mut session = ConversionSession::new(options);
    session.migrate(&files)?;
    if args.json {
        write_migration_json(&mut stdout, session.stats())?;
    } else {
        write_migration_summary(&mut stdout, session.stats(), &session.options().output, dry_run)?;
    }

    Ok(())
}

fn run_analyze(args: &AnalyzeArgs) -> Result<()> {
    if !args.graph.exists() {
        bail!("Path does not exist: {}", args.graph.display());
    }

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let report = generate_report(&args.graph, args.sample_size, &mut rng)?;

    let mut stdout = io::stdout().lock();
    if args.json {
        write_analysis_json(&mut stdout, &report)?;
    } else {
        write_analysis(&mut stdout, &report)?;
    }
    Ok(())
}
