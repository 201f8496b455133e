//! Error types for the generation pipeline.

use thiserror::Error;

/// The error enum for all generation operations.
///
/// Degenerate page bands inside noise rendering are not represented here:
/// they are swallowed at the call site and render as an empty string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenError {
    #[error("empty sampling range: max_number ({max}) must be >= start ({start})")]
    InvalidRange { max: u32, start: u32 },

    #[error("weight table error: {0}")]
    Weights(String),
}
