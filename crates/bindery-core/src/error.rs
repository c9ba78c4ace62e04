//! Error types for `bindery-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// The referenced content item does not exist, or is not a book.
  #[error("book not found")]
  NotFound,

  /// A host platform call failed. The adapter layers translate this into
  /// the contract's defaults or a 404 envelope; it never reaches the wire
  /// as a 5xx.
  #[error("host error: {0}")]
  Host(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  /// Box an arbitrary host backend error into [`Error::Host`].
  pub fn host<E>(e: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Error::Host(Box::new(e))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
