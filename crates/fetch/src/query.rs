//! URL query parameter helpers.
//!
//! Pure string-in, string-out rewrites over the `url` crate. Unlike the
//! cache-defeating rewrite in [`crate::uncache`], these require absolute
//! URLs since they round-trip through a full parse.

use anyhow::{Error, anyhow};
use url::Url;

/// Get the decoded value of a query parameter from a URL.
///
/// Returns `None` when the parameter is absent or the URL does not parse.
/// An empty value (`?flag=` or a bare `?flag`) is `Some("")`.
///
/// ```
/// let value = fetch::query::query_param("https://mydogs.net?dog=beagle", "dog");
/// assert_eq!(value.as_deref(), Some("beagle"));
/// ```
pub fn query_param(url: &str, name: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    parsed
        .query_pairs()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}

/// Return a new URL string with the given query parameter set.
///
/// An existing parameter of the same name is replaced rather than
/// duplicated; all other parameters are preserved.
///
/// # Errors
///
/// Returns `Err` if `url` cannot be parsed as an absolute URL.
pub fn with_query_param(url: &str, key: &str, value: &str) -> Result<String, Error> {
    let mut parsed = Url::parse(url).map_err(|err| anyhow!("Invalid URL {url}: {err}"))?;

    let retained: Vec<(String, String)> = parsed
        .query_pairs()
        .filter(|(name, _)| name != key)
        .map(|(name, val)| (name.into_owned(), val.into_owned()))
        .collect();

    {
        let mut pairs = parsed.query_pairs_mut();
        pairs.clear();
        for (name, val) in &retained {
            pairs.append_pair(name, val);
        }
        pairs.append_pair(key, value);
    }

    Ok(parsed.into())
}

/// Rewrite an `http` URL to `https`; identity for URLs already on `https`.
///
/// # Errors
///
/// Returns `Err` if `url` cannot be parsed, or its scheme is neither `http`
/// nor `https`.
pub fn force_https(url: &str) -> Result<String, Error> {
    let mut parsed = Url::parse(url).map_err(|err| anyhow!("Invalid URL {url}: {err}"))?;
    match parsed.scheme() {
        "https" => {}
        "http" => parsed
            .set_scheme("https")
            .map_err(|()| anyhow!("Cannot upgrade scheme for {url}"))?,
        other => return Err(anyhow!("Cannot force https on {other} URL {url}")),
    }
    Ok(parsed.into())
}
