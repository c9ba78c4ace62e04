//! `GET /book/get/{book_id}`.
//!
//! Returns the bare [`BookView`] with no envelope. An unknown or
//! unparseable id yields the default-filled shape (empty strings, genre
//! "N/A") rather than a 404 — the read contract has no not-found signal.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
};

use bindery_core::{HostPlatform, book::BookRepo, view::BookView};

use crate::handlers::parse_book_id;

pub async fn handler<H>(
  State(host): State<Arc<H>>,
  Path(book_id): Path<String>,
) -> Json<BookView>
where
  H: HostPlatform + 'static,
{
  let id = parse_book_id(&book_id);
  let record = BookRepo::new(host).read(id).await;
  Json(BookView::from(record))
}
