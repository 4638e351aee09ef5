//! Sequential resource preloading with per-item timing metadata.
//!
//! Given an ordered list of resource locators, [`preload`] loads each one
//! strictly one at a time through a [`Fetcher`], records success/failure and
//! elapsed wall-clock time per item, and resolves with the full ordered
//! report once the last item has settled.

use fetch::{Fetcher, uncache};
use log::{debug, warn};
use std::time::{Duration, Instant};

/// Outcome of preloading a single resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreloadResult {
    /// The locator actually fetched, after the cache-defeating rewrite.
    pub src: String,
    /// Whether the load resolved without error.
    pub success: bool,
    /// Wall-clock time from load start to resolution. Subject to a small
    /// scheduler-granularity margin of error (~3ms).
    pub elapsed: Duration,
}

/// Ordered preload outcomes, one entry per input resource, in input order.
pub type PreloadReport = Vec<PreloadResult>;

/// Preload an ordered list of resources, one at a time.
///
/// Each locator is rewritten with a cache-defeating query token before
/// fetching, so repeated preloads of the same resource are not served from
/// cache. Loads are strictly sequential: fetching resource `i + 1` does not
/// begin until resource `i` has resolved. That bounds concurrent network and
/// memory pressure and makes the report order deterministic, at the cost of
/// total latency being the sum of the individual loads.
///
/// A failed load is recorded and skipped, never retried; one bad resource
/// does not abort the batch. Empty input resolves immediately with an empty
/// report.
///
/// There is no overall timeout: a fetch that never resolves stalls the rest
/// of the sequence. Callers that need a ceiling should wrap the returned
/// future in `tokio::time::timeout`.
pub async fn preload<F, I, S>(fetcher: &F, resources: I) -> PreloadReport
where
    F: Fetcher,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut report = PreloadReport::new();
    for resource in resources {
        let src = uncache(resource.as_ref());

        let started = Instant::now();
        let outcome = fetcher.fetch(&src).await;
        let elapsed = started.elapsed();

        match &outcome {
            Ok(transferred) => debug!("preloaded {src} ({transferred} bytes in {elapsed:?})"),
            Err(err) => warn!("preload of {src} failed after {elapsed:?}: {err}"),
        }
        report.push(PreloadResult {
            src,
            success: outcome.is_ok(),
            elapsed,
        });
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{Error, anyhow};
    use std::sync::Mutex;

    /// Fetcher that fails any locator containing a marker substring and
    /// records the order locators were requested in.
    struct ScriptedFetcher {
        fail_marker: &'static str,
        requested: Mutex<Vec<String>>,
    }

    impl ScriptedFetcher {
        fn new(fail_marker: &'static str) -> Self {
            Self {
                fail_marker,
                requested: Mutex::new(Vec::new()),
            }
        }
    }

    impl Fetcher for ScriptedFetcher {
        async fn fetch(&self, locator: &str) -> Result<u64, Error> {
            self.requested
                .lock()
                .expect("lock poisoned")
                .push(locator.to_owned());
            if locator.contains(self.fail_marker) {
                Err(anyhow!("scripted failure for {locator}"))
            } else {
                Ok(0)
            }
        }
    }

    #[tokio::test]
    async fn test_report_has_one_entry_per_resource_in_input_order() {
        let fetcher = ScriptedFetcher::new("!never!");
        let report = preload(&fetcher, ["image.gif", "sun.jpg", "landscape.png"]).await;

        assert_eq!(report.len(), 3);
        assert!(report[0].src.starts_with("image.gif?_="));
        assert!(report[1].src.starts_with("sun.jpg?_="));
        assert!(report[2].src.starts_with("landscape.png?_="));
        assert!(report.iter().all(|result| result.success));
    }

    #[tokio::test]
    async fn test_single_successful_resource() {
        let fetcher = ScriptedFetcher::new("!never!");
        let report = preload(&fetcher, ["landscape.png"]).await;

        assert_eq!(report.len(), 1);
        assert!(report[0].success);
        assert!(report[0].elapsed >= Duration::ZERO);
    }

    #[tokio::test]
    async fn test_failed_resource_does_not_abort_the_batch() {
        let fetcher = ScriptedFetcher::new("broken");
        let report = preload(&fetcher, ["ok.gif", "broken.jpg", "also-ok.png"]).await;

        assert_eq!(report.len(), 3, "Batch must run to completion");
        assert!(report[0].success);
        assert!(!report[1].success);
        assert!(report[2].success);
    }

    #[tokio::test]
    async fn test_empty_input_resolves_with_empty_report() {
        let fetcher = ScriptedFetcher::new("!never!");
        let report = preload(&fetcher, Vec::<String>::new()).await;
        assert!(report.is_empty());
    }

    #[tokio::test]
    async fn test_resources_are_fetched_sequentially_in_order() {
        let fetcher = ScriptedFetcher::new("broken");
        let report = preload(&fetcher, ["a.png", "broken.png", "b.png"]).await;

        let requested = fetcher.requested.lock().expect("lock poisoned");
        assert_eq!(requested.len(), 3);
        for (request, result) in requested.iter().zip(report.iter()) {
            assert_eq!(request, &result.src);
        }
    }

    #[tokio::test]
    async fn test_same_resource_gets_distinct_cache_tokens() {
        let fetcher = ScriptedFetcher::new("!never!");
        let report = preload(&fetcher, ["image.gif", "image.gif"]).await;
        assert_ne!(report[0].src, report[1].src);
    }
}
