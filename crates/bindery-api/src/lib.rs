//! JSON REST API for Bindery books.
//!
//! Exposes an axum [`Router`] backed by any [`bindery_core::HostPlatform`].
//! Auth, TLS, and transport concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! The route set lives under the `books/v1` namespace:
//!
//! ```rust,ignore
//! .nest("/books/v1", bindery_api::api_router(host.clone()))
//! ```
//!
//! Response shapes are asymmetric by contract: mutation routes wrap their
//! payload in a `{status, data}` envelope, read routes return the bare
//! payload. See [`envelope`].

pub mod envelope;
pub mod handlers;

use std::sync::Arc;

use axum::{
  Router,
  routing::{delete, get, post, put},
};
use bindery_core::HostPlatform;

/// Build a fully-materialised API router for `host`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<H>(host: Arc<H>) -> Router<()>
where
  H: HostPlatform + 'static,
{
  Router::new()
    .route("/book/create", post(handlers::create::handler::<H>))
    .route("/book/get", get(handlers::list::handler::<H>))
    .route("/book/get/{book_id}", get(handlers::get::handler::<H>))
    .route("/book/update/{book_id}", put(handlers::update::handler::<H>))
    .route("/book/delete/{book_id}", delete(handlers::delete::handler::<H>))
    .with_state(host)
}
