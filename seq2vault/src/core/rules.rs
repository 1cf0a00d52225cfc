// src/core/rules.rs
//! Text rewrites applied to every note, one module per stage.
//!
//! Each stage takes the whole note as produced by the stage before it and
//! returns new text. Stages never fail: constructs they cannot make sense of
//! are passed through as-is.

pub mod admonitions;
pub mod block_ids;
pub mod block_refs;
pub mod cleanup;
pub mod embeds;
pub mod flatten;
pub mod line;
pub mod numbered_lists;
pub mod properties;
pub mod tasks;
pub mod whitespace;

pub use block_refs::BlockRefMode;
