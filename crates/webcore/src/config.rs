//! Runtime configuration for webcore polling defaults.
//!
//! Defaults can be loaded from environment variables or constructed
//! programmatically; the result converts into [`WaitOptions`] for use with
//! [`wait::wait_until`].

use std::env;
use wait::WaitOptions;

/// Polling defaults for condition waiting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WebcoreConfig {
    /// Ceiling in milliseconds before a wait gives up
    pub timeout_ms: u64,
    /// Interval in milliseconds between predicate evaluations
    pub check_gap_ms: u64,
}

impl WebcoreConfig {
    /// Construct a config with explicit values.
    ///
    /// A zero check gap is clamped to 1ms.
    pub const fn new(timeout_ms: u64, check_gap_ms: u64) -> Self {
        let gap = if check_gap_ms < 1 { 1 } else { check_gap_ms };
        Self {
            timeout_ms,
            check_gap_ms: gap,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Reads the following environment variables:
    /// - `WEBCORE_TIMEOUT_MS`: wait ceiling in milliseconds (default: 5000)
    /// - `WEBCORE_CHECK_GAP_MS`: poll interval in milliseconds (default: 5)
    pub fn from_env() -> Self {
        let timeout_ms = env::var("WEBCORE_TIMEOUT_MS")
            .ok()
            .and_then(|val| val.parse::<u64>().ok())
            .unwrap_or(5000);
        let check_gap_ms = env::var("WEBCORE_CHECK_GAP_MS")
            .ok()
            .and_then(|val| val.parse::<u64>().ok())
            .unwrap_or(5)
            .max(1);
        Self {
            timeout_ms,
            check_gap_ms,
        }
    }

    /// Convert into options for [`wait::wait_until`].
    pub const fn wait_options(self) -> WaitOptions {
        WaitOptions::new(self.timeout_ms, self.check_gap_ms)
    }
}

impl Default for WebcoreConfig {
    fn default() -> Self {
        Self::new(5000, 5)
    }
}
