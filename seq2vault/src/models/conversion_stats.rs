// src/models/conversion_stats.rs

/// Counters produced while converting a single note.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConversionStats {
    /// Property keys moved into frontmatter, in declaration order.
    pub properties: Vec<String>,
    pub admonitions: u64,
    pub block_refs_flagged: u64,
    /// One per task state present in the note, not one per task.
    pub task_states: u64,
    /// `{{query ...}}` blocks left for manual conversion.
    pub queries: u64,
}

impl ConversionStats {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            properties: Vec::new(),
            admonitions: 0,
            block_refs_flagged: 0,
            task_states: 0,
            queries: 0,
        }
    }
}
