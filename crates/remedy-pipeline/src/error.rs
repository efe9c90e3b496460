//! Error type for `remedy-pipeline`.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error(transparent)]
  Csv(#[from] remedy_csv::Error),

  /// An input file loaded but lacks a column the pipeline needs.
  #[error("invalid {input} input: {source}")]
  Input {
    input:  &'static str,
    #[source]
    source: remedy_core::Error,
  },

  #[error("table error: {0}")]
  Table(#[from] remedy_core::Error),

  #[error("jurisdiction selector is empty")]
  EmptySelector,

  #[error("cannot create output directory {}: {source}", path.display())]
  OutputDir {
    path:   PathBuf,
    #[source]
    source: std::io::Error,
  },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
