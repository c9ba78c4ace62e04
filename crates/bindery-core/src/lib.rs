//! Core types and trait definitions for the Bindery book API.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! It defines the seam to the host content platform ([`host::HostPlatform`])
//! and the thin orchestration layer on top of it: author resolution, the
//! book repository adapter, and the public book view.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod author;
pub mod book;
pub mod content;
pub mod error;
pub mod host;
pub mod user;
pub mod view;

pub use error::{Error, Result};
pub use host::HostPlatform;
