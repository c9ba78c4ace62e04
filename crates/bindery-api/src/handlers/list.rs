//! `GET /book/get` — all published books as a bare array.

use std::sync::Arc;

use axum::{Json, extract::State};

use bindery_core::{HostPlatform, book::BookRepo, view::BookView};

pub async fn handler<H>(State(host): State<Arc<H>>) -> Json<Vec<BookView>>
where
  H: HostPlatform + 'static,
{
  let records = match BookRepo::new(host).list().await {
    Ok(records) => records,
    Err(e) => {
      // A host failure reads as "no books"; the contract has no error shape.
      tracing::warn!(error = %e, "book listing failed");
      Vec::new()
    }
  };

  Json(records.into_iter().map(BookView::from).collect())
}
