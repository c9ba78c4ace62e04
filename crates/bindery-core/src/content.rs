//! Generic content-item types — the host's storage vocabulary.
//!
//! A content item is a typed, titled record with an excerpt, an owning
//! author, and a publication status. Books are content items of type
//! [`book::BOOK_TYPE`](crate::book::BOOK_TYPE); the core never assumes any
//! other item type exists.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Host-assigned content item identifier. Nonzero for persisted items; the
/// zero id is reserved as "no item" by the REST contract.
pub type ItemId = u64;

/// Publication status of a content item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentStatus {
  Published,
  Draft,
}

/// A stored content item as returned by the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentItem {
  pub item_id:      ItemId,
  pub content_type: String,
  pub title:        String,
  pub excerpt:      String,
  pub author:       crate::user::UserId,
  pub status:       ContentStatus,
  pub created_at:   DateTime<Utc>,
}

/// Input for [`HostPlatform::insert_item`](crate::host::HostPlatform::insert_item).
/// The id and creation timestamp are assigned by the host.
#[derive(Debug, Clone)]
pub struct NewContentItem {
  pub content_type: String,
  pub title:        String,
  pub excerpt:      String,
  pub author:       crate::user::UserId,
  pub status:       ContentStatus,
}

/// Field-by-field patch for an existing item. `None` fields are untouched.
#[derive(Debug, Clone, Default)]
pub struct ContentPatch {
  pub title:   Option<String>,
  pub excerpt: Option<String>,
  pub author:  Option<crate::user::UserId>,
}

impl ContentPatch {
  pub fn is_empty(&self) -> bool {
    self.title.is_none() && self.excerpt.is_none() && self.author.is_none()
  }
}

/// Capability descriptor registered with the host at startup.
///
/// Registration is advisory: it announces the type and its taxonomies to the
/// host, but item inserts are not gated on it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentTypeDef {
  pub name:          String,
  pub singular_name: String,
  pub taxonomies:    Vec<String>,
}
