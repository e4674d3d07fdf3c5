// File: src/error.rs
use thiserror::Error;

/// Failures while reading the generated emoji table.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read emoji table: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed emoji table: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failures while writing or reading a compiled set snapshot.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("snapshot I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("snapshot encoding failed: {0}")]
    Encode(#[from] bincode::Error),
    #[error("could not move snapshot into place: {0}")]
    Persist(#[from] tempfile::PersistError),
}

/// Rejected token ranges passed to `format`. Offsets are code-point indices.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("token range {start}..{end} is inverted")]
    Inverted { start: usize, end: usize },
    #[error("token range ends at {end} but the text is {len} code points long")]
    OutOfBounds { end: usize, len: usize },
    #[error("token starting at {start} overlaps the previous token ending at {previous_end}")]
    Overlapping { previous_end: usize, start: usize },
}
