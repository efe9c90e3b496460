//! Error type for `remedy-csv`.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("cannot open {}: {source}", path.display())]
  Open {
    path:   PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("malformed CSV in {}: {source}", path.display())]
  Malformed {
    path:   PathBuf,
    #[source]
    source: csv::Error,
  },

  #[error("cannot write {}: {source}", path.display())]
  Write {
    path:   PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("table error in {}: {source}", path.display())]
  Table {
    path:   PathBuf,
    #[source]
    source: remedy_core::Error,
  },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
