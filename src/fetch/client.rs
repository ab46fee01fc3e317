//! HTTP access to the APOD API and image host.

use anyhow::{Context, Result, bail};
use log::debug;
use std::io::Read;
use std::time::Duration;

use crate::utils::config::ApiConsts;

/// Supplies page bodies and image bytes. The core never retries; a failed call is final.
pub trait Fetcher {
    /// GET `url` with `query` parameters and return the whole body as text.
    fn fetch_text(&self, url: &str, query: &[(&str, &str)]) -> Result<String>;
    /// GET `url` and return the raw body.
    fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>>;
}

/// [`Fetcher`] backed by a `ureq` agent.
pub struct ApodClient {
    http_client: ureq::Agent,
}

impl Default for ApodClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApodClient {
    pub fn new() -> Self {
        let http_client = ureq::AgentBuilder::new()
            .timeout_connect(Duration::from_secs(ApiConsts::CONNECT_TIMEOUT_SECS))
            .timeout_read(Duration::from_secs(ApiConsts::READ_TIMEOUT_SECS))
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build();
        Self { http_client }
    }

    fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<ureq::Response> {
        let mut request = self.http_client.get(url);
        for (key, value) in query {
            request = request.query(key, value);
        }
        match request.call() {
            Ok(response) => Ok(response),
            Err(ureq::Error::Status(code, response)) => {
                bail!("{} returned HTTP {} {}", url, code, response.status_text())
            }
            Err(ureq::Error::Transport(transport)) => {
                bail!("request to {} failed: {}", url, transport)
            }
        }
    }
}

impl Fetcher for ApodClient {
    fn fetch_text(&self, url: &str, query: &[(&str, &str)]) -> Result<String> {
        debug!("GET {}", url);
        self.get(url, query)?
            .into_string()
            .with_context(|| format!("read body from {}", url))
    }

    fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        debug!("GET {}", url);
        let reader = self.get(url, &[])?.into_reader();
        read_capped(reader, ApiConsts::MAX_IMAGE_BYTES)
            .with_context(|| format!("read image from {}", url))
    }
}

/// Read all of `reader`, failing once more than `max` bytes arrive instead of truncating.
pub fn read_capped<R: Read>(reader: R, max: u64) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    reader.take(max.saturating_add(1)).read_to_end(&mut bytes)?;
    if bytes.len() as u64 > max {
        bail!("body exceeds {} bytes", max);
    }
    Ok(bytes)
}
