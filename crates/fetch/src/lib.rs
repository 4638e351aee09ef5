//! Resource fetching primitive for the webcore utility library.
//!
//! This crate provides:
//! - [`Fetcher`]: the asynchronous load-and-notify seam the preloader is
//!   generic over
//! - [`HttpFetcher`]: the default implementation, dispatching on URL scheme
//!   (`http`/`https` via reqwest, `file` via the local filesystem)
//! - Cache-defeating locator rewrites and URL query helpers

/// Fetcher trait and the scheme-dispatched default implementation
mod fetcher;
pub mod query;
/// Cache-defeating locator rewrite and rejection-sampled randomness
pub mod uncache;

pub use fetcher::{Fetcher, HttpFetcher};
pub use uncache::{random_excluding, uncache};
