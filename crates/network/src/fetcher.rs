// crates/network/src/fetcher.rs
//! Blocking feed download with bounded retries

use crate::error::{NetworkError, NetworkResult};
use reqwest::blocking::Client as ReqwestClient;
use reqwest::Url;
use std::time::Duration;

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
    /// Maximum redirects to follow
    pub max_redirects: usize,
    /// Extra attempts after a retryable failure
    pub max_retries: u32,
    /// Delay before the first retry; doubles on each further retry
    pub retry_delay: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: format!("feedpage/{}", env!("CARGO_PKG_VERSION")),
            max_redirects: 10,
            max_retries: 2,
            retry_delay: Duration::from_millis(250),
        }
    }
}

impl ClientConfig {
    /// Delay before retry number `attempt` (1-based)
    pub fn delay_for_retry(&self, attempt: u32) -> Duration {
        self.retry_delay
            .saturating_mul(2u32.saturating_pow(attempt.saturating_sub(1)))
    }
}

/// Downloads feed documents over HTTP(S)
pub struct FeedFetcher {
    inner: ReqwestClient,
    config: ClientConfig,
}

impl FeedFetcher {
    /// Creates a fetcher with default configuration
    pub fn new() -> NetworkResult<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Creates a fetcher with custom configuration
    pub fn with_config(config: ClientConfig) -> NetworkResult<Self> {
        let inner = ReqwestClient::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .build()
            .map_err(NetworkError::Http)?;

        Ok(Self { inner, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Checks that `url` is an absolute http(s) URL
    pub fn parse_url(url: &str) -> NetworkResult<Url> {
        let parsed =
            Url::parse(url.trim()).map_err(|e| NetworkError::InvalidUrl(format!("{}: {}", url, e)))?;

        match parsed.scheme() {
            "http" | "https" => Ok(parsed),
            other => Err(NetworkError::InvalidUrl(format!(
                "{}: unsupported scheme '{}'",
                url, other
            ))),
        }
    }

    /// Downloads the body at `url`
    ///
    /// Timeouts, connection failures and 5xx answers are retried up to
    /// `max_retries` times; anything else fails immediately.
    pub fn fetch(&self, url: &str) -> NetworkResult<Vec<u8>> {
        let url = Self::parse_url(url)?;
        let mut attempt = 0;

        loop {
            match self.fetch_once(&url) {
                Ok(body) => {
                    log::info!("Fetched {} bytes from {}", body.len(), url);
                    return Ok(body);
                }
                Err(e) if e.is_retryable() && attempt < self.config.max_retries => {
                    attempt += 1;
                    let delay = self.config.delay_for_retry(attempt);
                    log::warn!(
                        "Fetching {} failed ({}), retry {}/{} in {:?}",
                        url,
                        e,
                        attempt,
                        self.config.max_retries,
                        delay
                    );
                    std::thread::sleep(delay);
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn fetch_once(&self, url: &Url) -> NetworkResult<Vec<u8>> {
        let response = self.inner.get(url.clone()).send()?;
        let status = response.status();

        if !status.is_success() {
            return Err(NetworkError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
                url: url.to_string(),
            });
        }

        Ok(response.bytes()?.to_vec())
    }
}
