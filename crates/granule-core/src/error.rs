use thiserror::Error;

/// Structural errors raised by core data types.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid chunk size: expected {expected} voxels, got {actual}")]
    InvalidChunkSize { expected: usize, actual: usize },
}
