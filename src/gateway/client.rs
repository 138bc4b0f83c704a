//! The fetch gateway: cached, time-bounded JSON requests

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use super::cache::{fingerprint, RequestCache};
use super::{FetchError, HttpTransport, RequestOptions, Transport};

/// Upper bound on a single network request
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// How long a cached response is served without refetching
pub const DEFAULT_FRESHNESS_WINDOW: Duration = Duration::from_secs(5 * 60);

/// Tunables for the gateway
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GatewayConfig {
    /// Request timeout
    pub timeout: Duration,
    /// Cache freshness window
    pub freshness_window: Duration,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            freshness_window: DEFAULT_FRESHNESS_WINDOW,
        }
    }
}

impl GatewayConfig {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_freshness_window(mut self, window: Duration) -> Self {
        self.freshness_window = window;
        self
    }
}

/// Single access point for outbound JSON requests
///
/// Construct one instance at startup and share it (e.g. behind an `Arc`)
/// with every data client.
#[derive(Debug)]
pub struct Gateway<T = HttpTransport> {
    transport: T,
    cache: RequestCache,
    timeout: Duration,
}

impl Default for Gateway<HttpTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl Gateway<HttpTransport> {
    /// Create a gateway over HTTP with the default timeout and freshness window
    pub fn new() -> Self {
        Self::with_config(GatewayConfig::default())
    }

    /// Create a gateway over HTTP with custom settings
    pub fn with_config(config: GatewayConfig) -> Self {
        Self::with_transport(HttpTransport::new(), config)
    }
}

impl<T: Transport> Gateway<T> {
    /// Create a gateway over any transport
    pub fn with_transport(transport: T, config: GatewayConfig) -> Self {
        Self {
            transport,
            cache: RequestCache::new(config.freshness_window),
            timeout: config.timeout,
        }
    }

    /// Fetches JSON from `url`, serving a fresh cached copy when one exists
    ///
    /// # Arguments
    /// * `url` - Absolute URL to request
    /// * `options` - Method, headers and body; part of the cache key
    ///
    /// # Returns
    /// * `Ok(Value)` - Parsed response body, from cache or network
    /// * `Err(FetchError)` - `Timeout`, `HttpStatus`, `Malformed` or `Network`
    ///
    /// # Behavior
    /// - A fresh entry for the fingerprint is returned without network access
    /// - Otherwise the request runs under the timeout; on elapse the in-flight
    ///   request is dropped
    /// - Only successful, parseable responses are stored; failures leave the
    ///   cache untouched
    pub async fn fetch_json(&self, url: &str, options: &RequestOptions) -> Result<Value, FetchError> {
        self.fetch_json_as(url, options).await
    }

    /// Like [`fetch_json`](Self::fetch_json), deserializing into `D`
    ///
    /// A body that is valid JSON but the wrong shape is reported as `Malformed`
    /// and is not stored. A fresh cached body that does not fit `D` is
    /// refetched.
    pub async fn fetch_json_as<D: DeserializeOwned>(
        &self,
        url: &str,
        options: &RequestOptions,
    ) -> Result<D, FetchError> {
        let key = fingerprint(url, options);

        if let Some(data) = self.cache.get_fresh(&key) {
            match serde_json::from_value(data) {
                Ok(decoded) => {
                    debug!(url, "cache hit");
                    return Ok(decoded);
                }
                Err(err) => debug!(url, error = %err, "cached response has another shape"),
            }
        }
        debug!(url, "cache miss, fetching");

        let data = self.fetch_uncached(url, options).await?;
        let decoded = serde_json::from_value(data.clone())?;
        self.cache.insert(key, data);
        debug!(url, entries = self.cache.len(), "stored response");

        Ok(decoded)
    }

    /// Runs one request under the timeout and parses the body
    async fn fetch_uncached(&self, url: &str, options: &RequestOptions) -> Result<Value, FetchError> {
        let response = tokio::time::timeout(self.timeout, self.transport.send(url, options))
            .await
            .map_err(|_| FetchError::Timeout(self.timeout))??;

        if !response.is_success() {
            return Err(FetchError::HttpStatus {
                status: response.status,
                url: url.to_string(),
            });
        }

        Ok(serde_json::from_str(&response.body)?)
    }

    /// `GET` shorthand for [`fetch_json_as`](Self::fetch_json_as)
    pub async fn get_json<D: DeserializeOwned>(&self, url: &str) -> Result<D, FetchError> {
        self.fetch_json_as(url, &RequestOptions::get()).await
    }

    /// Drops every cached response
    pub fn clear(&self) {
        self.cache.clear();
        debug!("cache cleared");
    }

    /// Number of cached responses, fresh or stale
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn freshness_window(&self) -> Duration {
        self.cache.freshness_window()
    }

    /// The underlying transport
    pub fn transport(&self) -> &T {
        &self.transport
    }
}
