use rand::Rng as _;

/// Ceiling for cache-defeating tokens. Wide enough that two preloads of the
/// same locator within a session will practically never collide.
const UNCACHE_CEILING: u64 = 5_000_000_000;

/// Rejection attempts before giving up on a blacklist that covers (almost)
/// the entire range.
const MAX_REJECTIONS: u32 = 1024;

/// Rewrite a resource locator with a cache-defeating query token.
///
/// Appends a `_=<random>` query parameter so repeated preloads of the same
/// resource are not served from a browser or CDN cache. The rewrite is
/// purely textual: the locator may be relative and is never parsed, so this
/// cannot fail. A fragment stays behind the token, so the token lands in
/// the query part that a server actually receives.
///
/// ```
/// let uncached = fetch::uncache("landscape.png");
/// assert!(uncached.starts_with("landscape.png?_="));
/// ```
pub fn uncache(locator: &str) -> String {
    let token = rand::thread_rng().gen_range(0..=UNCACHE_CEILING);
    let (base, fragment) = match locator.split_once('#') {
        Some((base, fragment)) => (base, Some(fragment)),
        None => (locator, None),
    };
    let separator = if base.contains('?') { '&' } else { '?' };
    match fragment {
        Some(fragment) => format!("{base}{separator}_={token}#{fragment}"),
        None => format!("{base}{separator}_={token}"),
    }
}

/// Uniform random integer in `0..=max`, excluding blacklisted values.
///
/// Uses an iterative rejection-sampling loop rather than recursion, so a
/// large blacklist cannot grow the stack. The loop is bounded: if the
/// blacklist covers the whole range (a caller error), the last sample is
/// returned after a fixed number of attempts instead of spinning forever.
pub fn random_excluding(max: u64, blacklist: &[u64]) -> u64 {
    let mut rng = rand::thread_rng();
    let mut value = rng.gen_range(0..=max);

    let mut rejections = 0;
    while blacklist.contains(&value) && rejections < MAX_REJECTIONS {
        value = rng.gen_range(0..=max);
        rejections += 1;
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uncache_appends_query_token() {
        let uncached = uncache("https://example.com/sun.jpg");
        assert!(uncached.starts_with("https://example.com/sun.jpg?_="));

        let token: u64 = uncached
            .rsplit_once("?_=")
            .expect("token separator")
            .1
            .parse()
            .expect("numeric token");
        assert!(token <= UNCACHE_CEILING);
    }

    #[test]
    fn test_uncache_uses_ampersand_when_query_exists() {
        let uncached = uncache("https://example.com/sun.jpg?size=large");
        assert!(uncached.starts_with("https://example.com/sun.jpg?size=large&_="));
    }

    #[test]
    fn test_uncache_keeps_the_token_out_of_the_fragment() {
        let uncached = uncache("page.html#top");
        assert!(uncached.starts_with("page.html?_="));
        assert!(uncached.ends_with("#top"));

        let with_query = uncache("page.html?lang=en#top");
        assert!(with_query.starts_with("page.html?lang=en&_="));
        assert!(with_query.ends_with("#top"));
    }

    #[test]
    fn test_uncache_is_unique_per_attempt() {
        let first = uncache("image.gif");
        let second = uncache("image.gif");
        // A collision here is possible but astronomically unlikely.
        assert_ne!(first, second);
    }

    #[test]
    fn test_random_excluding_skips_blacklisted_values() {
        for _ in 0..100 {
            let value = random_excluding(10, &[7, 8, 9]);
            assert!(value <= 10);
            assert!(!(7..=9).contains(&value));
        }
    }

    #[test]
    fn test_random_excluding_terminates_on_full_blacklist() {
        // Every value is blacklisted; the bounded loop must still return.
        let value = random_excluding(1, &[0, 1]);
        assert!(value <= 1);
    }
}
