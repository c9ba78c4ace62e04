//! `DELETE /book/delete/{book_id}` — irreversible hard delete.
//!
//! 404 unless the id refers to an existing item of the books type.

use std::sync::Arc;

use axum::{
  extract::{Path, State},
  response::{IntoResponse, Response},
};

use bindery_core::{HostPlatform, book::BookRepo};

use crate::{
  envelope::{ActionNote, Envelope, MSG_DELETED, MSG_NO_BOOK_WITH_ID},
  handlers::parse_book_id,
};

pub async fn handler<H>(
  State(host): State<Arc<H>>,
  Path(book_id): Path<String>,
) -> Response
where
  H: HostPlatform + 'static,
{
  let id = parse_book_id(&book_id);

  match BookRepo::new(host).delete(id).await {
    Ok(()) => Envelope::ok(ActionNote {
      success: true,
      message: MSG_DELETED.to_owned(),
    }),
    Err(e) => {
      tracing::debug!(error = %e, book_id = id, "delete rejected");
      Envelope::not_found(ActionNote {
        success: false,
        message: MSG_NO_BOOK_WITH_ID.to_owned(),
      })
    }
  }
  .into_response()
}
