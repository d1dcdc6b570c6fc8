use crate::config::FeedConfig;
use mixfeed_core::{Error, Result};
use reqwest::{Client, StatusCode};
use url::Url;

/// Single-shot feed requests over a pooled reqwest client. One GET per call,
/// no retries; the caller decides whether a failed attempt is retried.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &FeedConfig) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.read_timeout)
            .build()
            .map_err(|e| Error::Transport(e.to_string()))?;
        Ok(Self { client })
    }

    /// Perform exactly one GET and return the body as UTF-8 text.
    ///
    /// A URL that does not parse fails with `InvalidUrl` before any network
    /// activity. A non-200 status fails with `BadStatus` and the body is
    /// discarded; dropping the response hands the connection back to the
    /// pool, so no exit path leaks a connection.
    pub async fn fetch(&self, raw_url: &str) -> Result<String> {
        let url = Url::parse(raw_url)
            .map_err(|e| Error::InvalidUrl(format!("{}: {}", raw_url, e)))?;

        tracing::debug!(%url, "requesting feed");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(request_error)?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::warn!(status = status.as_u16(), "feed returned non-200 status");
            return Err(Error::BadStatus(status.as_u16()));
        }

        response.text().await.map_err(request_error)
    }
}

fn request_error(err: reqwest::Error) -> Error {
    if err.is_timeout() {
        Error::Timeout
    } else {
        Error::Transport(err.to_string())
    }
}
