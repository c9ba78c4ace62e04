//! The book repository adapter — Book-shaped operations translated into
//! host content/taxonomy/user calls.
//!
//! A book is a published content item of type [`BOOK_TYPE`] whose
//! description lives in the item excerpt and whose genres are terms in the
//! [`BOOK_GENRES`] taxonomy. The adapter holds no state of its own.

use std::sync::Arc;

use crate::{
  Error, Result,
  content::{ContentPatch, ContentStatus, ContentTypeDef, ItemId, NewContentItem},
  host::HostPlatform,
  user::{UserId, UserMeta},
};

/// Content type name for books.
pub const BOOK_TYPE: &str = "books";

/// Taxonomy name for book genres.
pub const BOOK_GENRES: &str = "book_genres";

/// Capability descriptor for the book content type, registered with the
/// host at server startup.
pub fn books_content_type() -> ContentTypeDef {
  ContentTypeDef {
    name:          BOOK_TYPE.to_owned(),
    singular_name: "book".to_owned(),
    taxonomies:    vec![BOOK_GENRES.to_owned()],
  }
}

/// Input for [`BookRepo::create`]. The author is already resolved to an id
/// by the caller; field presence has already been checked at the handler.
#[derive(Debug, Clone)]
pub struct NewBook {
  pub title:       String,
  pub description: String,
  pub genres:      Vec<String>,
  pub author_id:   UserId,
}

/// Field-by-field update. `None` fields are left untouched; `genres` is a
/// full replacement of the item's term set when present.
#[derive(Debug, Clone, Default)]
pub struct BookPatch {
  pub title:       Option<String>,
  pub description: Option<String>,
  pub genres:      Option<Vec<String>>,
  pub author_id:   Option<UserId>,
}

/// A book as read back from the host, before serialization into the public
/// view. Missing items read as all-default fields rather than an error —
/// the REST contract has no not-found shape for reads.
#[derive(Debug, Clone, Default)]
pub struct BookRecord {
  pub item_id:     ItemId,
  pub title:       String,
  pub description: String,
  pub genres:      Vec<String>,
  pub author:      UserMeta,
}

/// Book-shaped facade over a [`HostPlatform`].
///
/// Cloning is cheap; the host handle is reference-counted.
#[derive(Clone)]
pub struct BookRepo<H> {
  host: Arc<H>,
}

impl<H: HostPlatform> BookRepo<H> {
  pub fn new(host: Arc<H>) -> Self {
    Self { host }
  }

  /// Insert a published book and attach its genre terms. Not atomic: a
  /// failure after the insert leaves an untagged book behind.
  pub async fn create(&self, book: NewBook) -> Result<ItemId> {
    let item_id = self
      .host
      .insert_item(NewContentItem {
        content_type: BOOK_TYPE.to_owned(),
        title:        book.title,
        excerpt:      book.description,
        author:       book.author_id,
        status:       ContentStatus::Published,
      })
      .await
      .map_err(Error::host)?;

    self
      .host
      .set_item_terms(item_id, BOOK_GENRES, &book.genres)
      .await
      .map_err(Error::host)?;

    tracing::info!(book_id = item_id, "created book");
    Ok(item_id)
  }

  /// Read a book, coercing every host miss or failure into defaults.
  ///
  /// An unknown id yields an empty title/description, no genres, and empty
  /// author names; the serializer turns the empty genre list into "N/A".
  pub async fn read(&self, id: ItemId) -> BookRecord {
    let item = self.host.get_item(id).await.ok().flatten();

    let genres = self
      .host
      .item_term_names(id, BOOK_GENRES)
      .await
      .unwrap_or_default();

    let author = match &item {
      Some(item) => self
        .host
        .get_user_meta(item.author)
        .await
        .ok()
        .flatten()
        .unwrap_or_default(),
      None => UserMeta::default(),
    };

    let (title, description) = item
      .map(|i| (i.title, i.excerpt))
      .unwrap_or_default();

    BookRecord { item_id: id, title, description, genres, author }
  }

  /// All published books, oldest first, one record per item.
  pub async fn list(&self) -> Result<Vec<BookRecord>> {
    let ids = self
      .host
      .list_items(BOOK_TYPE, ContentStatus::Published)
      .await
      .map_err(Error::host)?;

    let mut records = Vec::with_capacity(ids.len());
    for id in ids {
      records.push(self.read(id).await);
    }
    Ok(records)
  }

  /// Apply a patch to a book. Only supplied fields change; the content
  /// patch is issued even when empty, so a zero-field update is a silent
  /// no-op success. No existence check, matching the create/read contract.
  pub async fn update(&self, id: ItemId, patch: BookPatch) -> Result<()> {
    if let Some(genres) = &patch.genres {
      self
        .host
        .set_item_terms(id, BOOK_GENRES, genres)
        .await
        .map_err(Error::host)?;
    }

    self
      .host
      .update_item(id, ContentPatch {
        title:   patch.title,
        excerpt: patch.description,
        author:  patch.author_id,
      })
      .await
      .map_err(Error::host)?;

    tracing::debug!(book_id = id, "updated book");
    Ok(())
  }

  /// Hard-delete a book. Fails with [`Error::NotFound`] unless the id
  /// refers to an existing item of type [`BOOK_TYPE`].
  pub async fn delete(&self, id: ItemId) -> Result<()> {
    let item = self
      .host
      .get_item(id)
      .await
      .map_err(Error::host)?
      .ok_or(Error::NotFound)?;

    if item.content_type != BOOK_TYPE {
      return Err(Error::NotFound);
    }

    self.host.delete_item(id).await.map_err(Error::host)?;
    tracing::info!(book_id = id, "deleted book");
    Ok(())
  }
}
