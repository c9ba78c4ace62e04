//! Response envelopes and payload shapes for the mutation routes.
//!
//! | Route | Success | Failure |
//! |-------|---------|---------|
//! | create | `{status:200, data:{success,book_id}}` | `{}` |
//! | update | `{status:200, data:{success,book_id}}` | `{status:404, data:{success,message}}` |
//! | delete | `{status:200, data:{success,message}}` | `{status:404, data:{success,message}}` |
//!
//! The `status` field is mirrored into the HTTP status; the empty envelope
//! goes out as HTTP 200 with no keys at all.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use bindery_core::content::ItemId;

pub const MSG_NOT_FOUND: &str = "Book not found!";
pub const MSG_DELETED: &str = "The book has been deleted successfully.";
pub const MSG_NO_BOOK_WITH_ID: &str = "No book found with the provided ID.";

/// Status-coded wrapper around a mutation payload. Both fields are omitted
/// from the JSON entirely when unset.
#[derive(Debug, Serialize, Deserialize)]
pub struct Envelope<T = serde_json::Value> {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub status: Option<u16>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub data:   Option<T>,
}

impl<T> Envelope<T> {
  pub fn ok(data: T) -> Self {
    Envelope { status: Some(200), data: Some(data) }
  }

  pub fn not_found(data: T) -> Self {
    Envelope { status: Some(404), data: Some(data) }
  }
}

impl Envelope {
  /// The silent failure shape of the create route: `{}`.
  pub fn empty() -> Self {
    Envelope { status: None, data: None }
  }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
  fn into_response(self) -> Response {
    let status = self
      .status
      .and_then(|s| StatusCode::from_u16(s).ok())
      .unwrap_or(StatusCode::OK);
    (status, Json(self)).into_response()
  }
}

/// Acknowledgement payload for create/update.
#[derive(Debug, Serialize, Deserialize)]
pub struct BookAck {
  pub success: bool,
  pub book_id: ItemId,
}

/// Message payload for delete and the not-found branches.
#[derive(Debug, Serialize, Deserialize)]
pub struct ActionNote {
  pub success: bool,
  pub message: String,
}
