//! Error types for `remedy-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("missing column: {0:?}")]
  MissingColumn(String),

  #[error("duplicate column: {0:?}")]
  DuplicateColumn(String),

  #[error("row {row} has {found} fields, expected {expected}")]
  RowArity {
    row:      usize,
    expected: usize,
    found:    usize,
  },

  /// A per-row value vector does not line up with the table it describes.
  #[error("expected {expected} values (one per row), got {found}")]
  LengthMismatch { expected: usize, found: usize },

  #[error("invalid date in {column} at row {row}: {value:?}")]
  InvalidDate {
    column: String,
    row:    usize,
    value:  String,
  },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
