//! Error types for the labeling pipeline

use thiserror::Error;

/// Errors produced by the core labeling pipeline
#[derive(Error, Debug)]
pub enum LabelError {
    /// An entity was constructed with its end before its start
    #[error("invalid offset range: end {end} precedes start {start}")]
    InvalidRange {
        /// Requested start offset
        start: usize,
        /// Requested end offset
        end: usize,
    },

    /// A character span does not map onto whole atoms of the text
    #[error("offsets ({start}, {end}) do not align to atom boundaries")]
    UnalignableOffset {
        /// Start character offset of the rejected span
        start: usize,
        /// End character offset of the rejected span
        end: usize,
    },

    /// The matcher was queried before its dictionary was compiled
    #[error("matcher used before the dictionary was compiled")]
    NotCompiled,

    /// Two resolved entities claim the same atom position
    #[error("overlapping spans claim atom position {position}")]
    OverlappingSpans {
        /// The contested atom position
        position: usize,
    },

    /// Token and spacing sequences differ in length
    #[error("token/spacing length mismatch: {tokens} tokens, {flags} spacing flags")]
    TokenSpacingMismatch {
        /// Number of tokens supplied
        tokens: usize,
        /// Number of spacing flags supplied
        flags: usize,
    },

    /// The pattern automaton could not be built
    #[error("failed to build pattern automaton: {0}")]
    AutomatonBuild(String),

    /// JSON serialization failed
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, LabelError>;
