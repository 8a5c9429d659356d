//! Error type for `bib-store-sheet`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("csv error: {0}")]
  Csv(#[from] csv::Error),

  #[error("io error: {0}")]
  Io(#[from] std::io::Error),

  #[error("blocking task error: {0}")]
  Background(#[from] tokio::task::JoinError),

  /// The file's header row does not match the expected field schema.
  #[error("sheet header mismatch: expected {expected:?}, found {found:?}")]
  HeaderMismatch {
    expected: Vec<String>,
    found:    Vec<String>,
  },

  #[error("row {line}: bad {column} value {value:?}")]
  BadCell {
    line:   u64,
    column: &'static str,
    value:  String,
  },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
