//! SQLite backend for the Bindery host platform.
//!
//! Wraps [`tokio_rusqlite`] so all database access runs on a dedicated
//! thread without blocking the async runtime. Implements
//! [`bindery_core::HostPlatform`]: the content-item store, the taxonomy
//! store, and the user directory, in one file-backed database.

mod encode;
mod host;
mod schema;

pub mod error;

pub use error::{Error, Result};
pub use host::SqliteHost;
