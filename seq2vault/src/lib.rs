// src/lib.rs
pub mod cli;
pub mod core;
pub mod logging;
pub mod models;
pub mod report;
pub mod utils;

pub use cli::{AnalyzeArgs, Args, Command, MigrateArgs, run};
pub use crate::core::pipeline::{Conversion, RuleOptions, convert_note};
pub use crate::core::session::ConversionSession;
