use anyhow::{Error, anyhow};
use bytes::{Bytes, BytesMut};
use log::debug;
use reqwest::get as reqwest_get;
use tokio::fs::read as tokio_fs_read;
use tokio_stream::{Stream, StreamExt as _};
use url::Url;

/// Asynchronous resource-loading primitive.
///
/// A fetcher issues a request for a resource locator and resolves once the
/// resource body has been fully transferred. Implementations must never
/// panic on a bad locator; every failure is reported through the returned
/// `Result` so callers can record it and move on.
pub trait Fetcher {
    /// Fetch the resource at `locator`, draining the body completely.
    ///
    /// # Returns
    ///
    /// The number of bytes transferred.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the locator cannot be parsed, the scheme is
    /// unsupported, or the transfer itself fails.
    fn fetch(&self, locator: &str) -> impl Future<Output = Result<u64, Error>> + Send;
}

/// Default [`Fetcher`] backed by the network and the local filesystem.
///
/// Supported URL schemes:
/// - `http`, `https`: Fetched via `reqwest` as a streaming response; the
///   body is drained chunk by chunk so the elapsed time a caller measures
///   covers the full transfer
/// - `file`: Read from the local filesystem
#[derive(Debug, Default, Clone, Copy)]
pub struct HttpFetcher;

impl HttpFetcher {
    /// Fetch the resource at `locator` and return its full body.
    ///
    /// Unlike [`Fetcher::fetch`] this buffers the body, for callers that
    /// want the content itself (e.g. loading a script) rather than a cache
    /// warm-up.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Fetcher::fetch`].
    pub async fn fetch_bytes(&self, locator: &str) -> Result<Bytes, Error> {
        let url = parse_locator(locator)?;
        match url.scheme() {
            "http" | "https" => {
                let mut stream = http_body_stream(&url).await?;
                let mut body = BytesMut::new();
                while let Some(chunk) = stream.next().await {
                    body.extend_from_slice(&chunk.map_err(Error::from)?);
                }
                Ok(body.freeze())
            }
            "file" => Ok(Bytes::from(read_file_url(&url).await?)),
            _ => Err(anyhow!("Unsupported url scheme {}", url.scheme())),
        }
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, locator: &str) -> Result<u64, Error> {
        let url = parse_locator(locator)?;
        let transferred = match url.scheme() {
            "http" | "https" => {
                let mut stream = http_body_stream(&url).await?;
                let mut total: u64 = 0;
                while let Some(chunk) = stream.next().await {
                    total += chunk.map_err(Error::from)?.len() as u64;
                }
                total
            }
            "file" => read_file_url(&url).await?.len() as u64,
            _ => return Err(anyhow!("Unsupported url scheme {}", url.scheme())),
        };
        debug!("fetched {url} ({transferred} bytes)");
        Ok(transferred)
    }
}

fn parse_locator(locator: &str) -> Result<Url, Error> {
    Url::parse(locator).map_err(|err| anyhow!("Invalid resource locator {locator}: {err}"))
}

async fn http_body_stream(
    url: &Url,
) -> Result<Box<dyn Stream<Item = Result<Bytes, reqwest::Error>> + Send + Unpin>, Error> {
    let response = reqwest_get(url.clone())
        .await
        .map_err(|err| anyhow!("Failed to fetch URL {url}: {err}"))?;

    if !response.status().is_success() {
        return Err(anyhow!(
            "Failed to fetch URL: {} (Status: {})",
            url,
            response.status()
        ));
    }
    Ok(Box::new(response.bytes_stream()))
}

async fn read_file_url(url: &Url) -> Result<Vec<u8>, Error> {
    let path = url
        .to_file_path()
        .map_err(|()| anyhow!("Invalid file path for file url: {url}"))?;
    Ok(tokio_fs_read(path).await?)
}
