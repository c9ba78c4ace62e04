//! Error type for `bindery-host-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("password hash error: {0}")]
  PasswordHash(String),

  #[error("date/time parse error: {0}")]
  DateParse(String),

  #[error("unknown {field}: {value:?}")]
  UnknownDiscriminant { field: &'static str, value: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
