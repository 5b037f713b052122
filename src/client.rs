//! The shared request primitive: cached GET against the Transfermarkt API.

use reqwest::Client;
use serde_json::Value;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, warn};

use crate::core::{decode_payload, default_header_map, endpoint_url, ResponseCache};
use crate::error::FetchError;
use crate::{ClientConfig, Result};

#[cfg(test)]
mod tests;

/// Context object shared by every endpoint call.
///
/// Holds the HTTP client (fixed base address, headers and timeout) and the
/// response cache. Clones share both. The cache lock is never held across a
/// network call, so concurrent misses on one key each reach the network and
/// the last response written wins.
#[derive(Clone)]
pub struct TmClient {
    http: Client,
    base_url: String,
    cache: Arc<Mutex<ResponseCache>>,
}

impl TmClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = Client::builder()
            .default_headers(default_header_map(&config)?)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            cache: Arc::new(Mutex::new(ResponseCache::new(
                config.cache_ttl,
                config.cache_capacity,
            ))),
        })
    }

    /// Client with the stock configuration.
    pub fn with_defaults() -> Result<Self> {
        Self::new(ClientConfig::default())
    }

    /// Payload for `endpoint`, or `None` on any remote failure.
    ///
    /// Failures are logged at `warn` with the HTTP status when there is one
    /// and the error message otherwise. They are never cached.
    pub async fn resolve(&self, endpoint: &str) -> Option<Value> {
        match self.try_resolve(endpoint).await {
            Ok(payload) => Some(payload),
            Err(err) => {
                match err.status_code() {
                    Some(status) => warn!(endpoint, status, "error fetching endpoint"),
                    None => warn!(endpoint, error = %err, "error fetching endpoint"),
                }
                None
            }
        }
    }

    /// Like [`resolve`](Self::resolve) but reports why the fetch failed.
    pub async fn try_resolve(&self, endpoint: &str) -> std::result::Result<Value, FetchError> {
        let cached = self.lock_cache().get(endpoint);
        if let Some(cached) = cached {
            debug!(endpoint, "cache hit");
            return Ok(cached);
        }

        let payload = self.fetch(endpoint).await?;
        self.lock_cache().insert(endpoint, payload.clone());
        info!(endpoint, "fetched and cached");
        Ok(payload)
    }

    async fn fetch(&self, endpoint: &str) -> std::result::Result<Value, FetchError> {
        let url = endpoint_url(&self.base_url, endpoint);
        let response = self.http.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        Ok(decode_payload(response.text().await?))
    }

    /// The underlying HTTP client, preconfigured with headers and timeout.
    pub fn http(&self) -> &Client {
        &self.http
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Number of stored cache entries, expired ones included.
    pub fn cache_len(&self) -> usize {
        self.lock_cache().len()
    }

    /// Drop expired cache entries now instead of on the next read.
    pub fn purge_expired(&self) -> usize {
        self.lock_cache().purge_expired()
    }

    pub fn clear_cache(&self) {
        self.lock_cache().clear();
    }

    fn lock_cache(&self) -> MutexGuard<'_, ResponseCache> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
