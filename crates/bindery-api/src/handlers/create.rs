//! `POST /book/create`.
//!
//! All four fields must be present, or the response is the silent empty
//! envelope — no content item is created and no author is provisioned. The
//! author is resolved (or provisioned) before the insert; a provisioned
//! author is *not* rolled back if the insert then fails.

use std::sync::Arc;

use axum::{extract::State, response::{IntoResponse, Response}, Json};
use serde::Deserialize;

use bindery_core::{
  HostPlatform, author,
  book::{BookRepo, NewBook},
};

use crate::{
  envelope::{BookAck, Envelope},
  handlers::GenreParam,
};

#[derive(Debug, Deserialize)]
pub struct CreateBook {
  pub title:       Option<String>,
  pub description: Option<String>,
  pub genre:       Option<GenreParam>,
  pub author:      Option<String>,
}

pub async fn handler<H>(
  State(host): State<Arc<H>>,
  Json(body): Json<CreateBook>,
) -> Response
where
  H: HostPlatform + 'static,
{
  let (Some(title), Some(description), Some(genre), Some(author_name)) =
    (body.title, body.description, body.genre, body.author)
  else {
    return Envelope::empty().into_response();
  };

  let author_id = match author::resolve_or_create(host.as_ref(), &author_name).await {
    Ok(id) => id,
    Err(e) => {
      tracing::warn!(error = %e, "author resolution failed during create");
      return Envelope::empty().into_response();
    }
  };

  let book = NewBook {
    title,
    description,
    genres: genre.into_labels(),
    author_id,
  };

  match BookRepo::new(host).create(book).await {
    Ok(book_id) => Envelope::ok(BookAck { success: true, book_id }).into_response(),
    Err(e) => {
      tracing::warn!(error = %e, "book creation failed");
      Envelope::empty().into_response()
    }
  }
}
