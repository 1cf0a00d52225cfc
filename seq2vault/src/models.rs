// src/models.rs
mod analysis_report;
mod conversion_stats;
mod migration_stats;
mod property;

pub use analysis_report::{
    AnalysisReport, FileCounts, FilePatterns, PatternSummary, Recommendation,
    RecommendationAction,
};
pub use conversion_stats::ConversionStats;
pub use migration_stats::MigrationStats;
pub use property::{Properties, PropertyValue};
