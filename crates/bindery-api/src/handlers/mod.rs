//! The five book route handlers.
//!
//! Each handler translates every failure into the wire contract locally —
//! defaults for reads, the empty envelope for create, 404 envelopes for
//! update/delete. None of the five routes surfaces a 5xx.

pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use serde::Deserialize;

use bindery_core::content::ItemId;

/// Best-effort parse of a path-captured book id. Anything unparseable maps
/// to the reserved id 0, which every downstream path treats as "no book".
pub(crate) fn parse_book_id(raw: &str) -> ItemId {
  raw.trim().parse().unwrap_or(0)
}

/// The `genre` request field: either a JSON array of labels or a single
/// string. A string is split on commas, matching the host's term-list
/// convention.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum GenreParam {
  Many(Vec<String>),
  One(String),
}

impl GenreParam {
  pub fn into_labels(self) -> Vec<String> {
    match self {
      GenreParam::Many(labels) => labels,
      GenreParam::One(s) => s
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(ToOwned::to_owned)
        .collect(),
    }
  }
}
