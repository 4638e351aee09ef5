//! Polling-based condition waiting with a timeout ceiling.
//!
//! [`wait_until`] re-evaluates a caller predicate on a fixed interval until
//! it returns true or the configured ceiling is reached, then resolves with
//! a [`PollOutcome`] describing which happened.

use log::debug;
use std::time::Duration;
use tokio::time::sleep;

/// Configuration for [`wait_until`].
///
/// Defaults match the classic polling setup: a 5000ms ceiling checked every
/// 5ms, i.e. up to 1000 predicate evaluations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitOptions {
    /// Total ms ceiling before giving up.
    pub timeout_ms: u64,
    /// Interval in ms between predicate evaluations. Zero is clamped to 1.
    pub check_gap_ms: u64,
}

impl WaitOptions {
    /// Construct options with explicit values.
    pub const fn new(timeout_ms: u64, check_gap_ms: u64) -> Self {
        Self {
            timeout_ms,
            check_gap_ms,
        }
    }
}

impl Default for WaitOptions {
    fn default() -> Self {
        Self::new(5000, 5)
    }
}

/// Outcome of a [`wait_until`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollOutcome {
    /// Whether the predicate returned true before the ceiling.
    pub success: bool,
    /// `checks * check_gap_ms` on success (an approximation in multiples of
    /// the gap, not wall-clock-measured); exactly `timeout_ms` on timeout.
    pub elapsed_ms: u64,
    /// Echoed configuration, for caller logging.
    pub check_gap_ms: u64,
    /// Echoed configuration, for caller logging.
    pub timeout_ms: u64,
}

/// Poll `condition` until it returns true or the timeout ceiling is reached.
///
/// The predicate must be a callable re-evaluated fresh on every tick, not a
/// pre-computed boolean: passing a value that can never change defeats the
/// mechanism and is a caller error. The first evaluation happens immediately
/// on entry; each subsequent one after a cooperative `check_gap_ms` sleep,
/// so concurrent waits never block the runtime. The outcome is produced
/// exactly once per call.
///
/// A predicate panic propagates; the poller does not mask caller bugs.
///
/// There is no cancellation handle: dropping the returned future (e.g. via
/// `tokio::select!`) aborts the pending tick chain.
pub async fn wait_until<P>(options: WaitOptions, mut condition: P) -> PollOutcome
where
    P: FnMut() -> bool,
{
    let check_gap_ms = options.check_gap_ms.max(1);
    // With a zero timeout this still performs a single check.
    let limit = options.timeout_ms.div_ceil(check_gap_ms).max(1);

    let mut checks: u64 = 0;
    loop {
        checks += 1;

        if condition() {
            return PollOutcome {
                success: true,
                elapsed_ms: checks * check_gap_ms,
                check_gap_ms,
                timeout_ms: options.timeout_ms,
            };
        }

        if checks >= limit {
            debug!(
                "wait_until timed out after {checks} checks ({}ms ceiling)",
                options.timeout_ms
            );
            return PollOutcome {
                success: false,
                elapsed_ms: options.timeout_ms,
                check_gap_ms,
                timeout_ms: options.timeout_ms,
            };
        }

        sleep(Duration::from_millis(check_gap_ms)).await;
    }
}
