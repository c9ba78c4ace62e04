//! The [`HostPlatform`] trait — the seam to the underlying content platform.
//!
//! The trait is implemented by host backends (e.g. `bindery-host-sqlite`).
//! Higher layers (`bindery-api`, the book repository adapter) depend on this
//! abstraction, not on any concrete backend. Methods are grouped by the three
//! host subsystems the core consumes: the content-item store, the taxonomy
//! store, and the user directory.

use std::future::Future;

use crate::{
  content::{ContentItem, ContentPatch, ContentStatus, ContentTypeDef, ItemId, NewContentItem},
  user::{NewUser, UserId, UserMeta},
};

/// Abstraction over the host content platform.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`). No method carries
/// transactional semantics: the core's multi-step sequences (resolve author,
/// insert item, attach terms) are not atomic, by contract.
pub trait HostPlatform: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Content-item store ────────────────────────────────────────────────

  /// Persist a new content item and return its host-assigned id.
  fn insert_item(
    &self,
    item: NewContentItem,
  ) -> impl Future<Output = Result<ItemId, Self::Error>> + Send + '_;

  /// Fetch an item by id. Returns `None` if no such item exists.
  fn get_item(
    &self,
    id: ItemId,
  ) -> impl Future<Output = Result<Option<ContentItem>, Self::Error>> + Send + '_;

  /// Apply `patch` to an existing item. Fields left `None` are untouched.
  /// Patching a nonexistent id is a silent no-op.
  fn update_item(
    &self,
    id: ItemId,
    patch: ContentPatch,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Hard-delete an item and its taxonomy attachments. Irreversible; there
  /// is no trash stage.
  fn delete_item(
    &self,
    id: ItemId,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// List ids of all items of `content_type` with `status`, oldest first.
  /// No pagination.
  fn list_items<'a>(
    &'a self,
    content_type: &'a str,
    status: ContentStatus,
  ) -> impl Future<Output = Result<Vec<ItemId>, Self::Error>> + Send + 'a;

  /// Announce a content type to the host. Advisory and idempotent.
  fn register_content_type(
    &self,
    def: ContentTypeDef,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  // ── Taxonomy store ────────────────────────────────────────────────────

  /// Replace the full term set of `id` within `taxonomy`. Terms are created
  /// on first use; previously attached terms not in `labels` are detached.
  fn set_item_terms<'a>(
    &'a self,
    id: ItemId,
    taxonomy: &'a str,
    labels: &'a [String],
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;

  /// Names of the terms attached to `id` within `taxonomy`. An unknown id
  /// simply has no terms.
  fn item_term_names<'a>(
    &'a self,
    id: ItemId,
    taxonomy: &'a str,
  ) -> impl Future<Output = Result<Vec<String>, Self::Error>> + Send + 'a;

  // ── User directory ────────────────────────────────────────────────────

  /// Ids of users whose display name contains `display_name`
  /// (case-insensitive), in host ranking order.
  fn search_users<'a>(
    &'a self,
    display_name: &'a str,
  ) -> impl Future<Output = Result<Vec<UserId>, Self::Error>> + Send + 'a;

  /// Provision a new user and return its id. The host stores only a hash of
  /// the supplied password.
  fn insert_user(
    &self,
    user: NewUser,
  ) -> impl Future<Output = Result<UserId, Self::Error>> + Send + '_;

  /// Public metadata for a user. Returns `None` for unknown ids.
  fn get_user_meta(
    &self,
    id: UserId,
  ) -> impl Future<Output = Result<Option<UserMeta>, Self::Error>> + Send + '_;
}
