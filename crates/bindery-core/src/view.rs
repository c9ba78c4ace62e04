//! The public book representation returned by the read endpoints.

use serde::{Deserialize, Serialize};

use crate::{book::BookRecord, user::UserMeta};

/// Sentinel shown when a book has no genre terms, or the taxonomy lookup
/// failed.
pub const GENRE_UNSET: &str = "N/A";

/// Genre field of a [`BookView`]: a list of term names, or the bare string
/// `"N/A"` when the list would be empty. The asymmetric shape is part of
/// the wire contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GenreField {
  Names(Vec<String>),
  Sentinel(String),
}

impl GenreField {
  pub fn from_names(names: Vec<String>) -> Self {
    if names.is_empty() {
      GenreField::Sentinel(GENRE_UNSET.to_owned())
    } else {
      GenreField::Names(names)
    }
  }
}

/// Public shape of a book: `{ title, description, genre, author }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookView {
  pub title:       String,
  pub description: String,
  pub genre:       GenreField,
  pub author:      UserMeta,
}

impl From<BookRecord> for BookView {
  fn from(record: BookRecord) -> Self {
    BookView {
      title:       record.title,
      description: record.description,
      genre:       GenreField::from_names(record.genres),
      author:      record.author,
    }
  }
}
