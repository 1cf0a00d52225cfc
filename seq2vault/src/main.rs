// src/main.rs
use anyhow::Result;
use clap::Parser as _;

use seq2vault::logging::init_logging;
use seq2vault::{Args, run};

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose)?;
    run(args)
}
