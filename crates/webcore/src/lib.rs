//! Webcore: small asynchronous utilities for resource warm-up and
//! condition waiting.
//!
//! This crate is the facade over the workspace members:
//! - [`preload`]: sequential resource preloading with per-item timing
//! - [`wait_until`]: polling-based condition waiting with a timeout ceiling
//! - [`Fetcher`]/[`HttpFetcher`] and URL helpers from the `fetch` crate
//!
//! Each entry point is a stateless function over its arguments; there is no
//! process-wide state, and independent calls may be in flight concurrently
//! without interference.

pub mod config;
/// User-agent classification for mobile platforms
pub mod device;

pub use fetch::{Fetcher, HttpFetcher, query, random_excluding, uncache};
pub use preload::{PreloadReport, PreloadResult, preload};
pub use wait::{PollOutcome, WaitOptions, wait_until};
