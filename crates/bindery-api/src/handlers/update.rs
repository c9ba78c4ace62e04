//! `PUT /book/update/{book_id}`.
//!
//! Applies only the supplied fields; a zero-field body is a silent no-op
//! success. The only failure the route reports is a zero/unparseable id —
//! once the id check passes the contract answers 200 regardless of whether
//! the item exists or any host call failed.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
  response::{IntoResponse, Response},
};
use serde::Deserialize;

use bindery_core::{
  HostPlatform, author,
  book::{BookPatch, BookRepo},
};

use crate::{
  envelope::{ActionNote, BookAck, Envelope, MSG_NOT_FOUND},
  handlers::{GenreParam, parse_book_id},
};

#[derive(Debug, Deserialize)]
pub struct UpdateBook {
  pub title:       Option<String>,
  pub description: Option<String>,
  pub genre:       Option<GenreParam>,
  pub author:      Option<String>,
}

pub async fn handler<H>(
  State(host): State<Arc<H>>,
  Path(book_id): Path<String>,
  Json(body): Json<UpdateBook>,
) -> Response
where
  H: HostPlatform + 'static,
{
  let id = parse_book_id(&book_id);
  if id == 0 {
    return Envelope::not_found(ActionNote {
      success: false,
      message: MSG_NOT_FOUND.to_owned(),
    })
    .into_response();
  }

  // A failed author resolution drops the field from the patch; the other
  // supplied fields still apply.
  let author_id = match &body.author {
    Some(name) => match author::resolve_or_create(host.as_ref(), name).await {
      Ok(id) => Some(id),
      Err(e) => {
        tracing::warn!(error = %e, "author resolution failed during update");
        None
      }
    },
    None => None,
  };

  let patch = BookPatch {
    title:       body.title,
    description: body.description,
    genres:      body.genre.map(GenreParam::into_labels),
    author_id,
  };

  if let Err(e) = BookRepo::new(host).update(id, patch).await {
    tracing::warn!(error = %e, book_id = id, "book update failed");
  }

  Envelope::ok(BookAck { success: true, book_id: id }).into_response()
}
