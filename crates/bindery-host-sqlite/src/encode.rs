//! Encoding and decoding helpers between Rust domain types and the
//! plain-text representations stored in SQLite columns.
//!
//! Timestamps are stored as RFC 3339 strings; enums as lowercase
//! discriminants.

use chrono::{DateTime, Utc};

use bindery_core::{content::ContentStatus, user::Role};

use crate::{Error, Result};

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String {
  dt.to_rfc3339()
}

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── ContentStatus ───────────────────────────────────────────────────────────

pub fn encode_status(s: ContentStatus) -> &'static str {
  match s {
    ContentStatus::Published => "published",
    ContentStatus::Draft => "draft",
  }
}

pub fn decode_status(s: &str) -> Result<ContentStatus> {
  match s {
    "published" => Ok(ContentStatus::Published),
    "draft" => Ok(ContentStatus::Draft),
    other => Err(Error::UnknownDiscriminant {
      field: "content status",
      value: other.to_owned(),
    }),
  }
}

// ─── Role ────────────────────────────────────────────────────────────────────

pub fn encode_role(r: Role) -> &'static str {
  match r {
    Role::Author => "author",
    Role::Subscriber => "subscriber",
  }
}
