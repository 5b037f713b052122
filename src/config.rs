//! Client configuration with the upstream API's defaults.

use std::num::NonZeroUsize;
use std::time::Duration;

/// Base address of the Transfermarkt API.
pub const DEFAULT_BASE_URL: &str = "https://tmapi-alpha.transfermarkt.technology/";

/// Language tag sent as `Accept-Language`. The API answers in this locale.
pub const DEFAULT_ACCEPT_LANGUAGE: &str = "pt-BR";

/// The API rejects requests without a browser-like user agent.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(5000);

pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(300);

/// Settings fixed for the lifetime of a [`TmClient`](crate::TmClient).
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use tmapi::ClientConfig;
///
/// let config = ClientConfig::default().with_cache_ttl(Duration::from_secs(60));
/// assert_eq!(config.cache_ttl, Duration::from_secs(60));
/// assert_eq!(config.timeout, Duration::from_millis(5000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub accept_language: String,
    pub user_agent: String,
    pub timeout: Duration,
    pub cache_ttl: Duration,
    /// Upper bound on stored entries, least recently used evicted first.
    /// `None` keeps every entry until it expires.
    pub cache_capacity: Option<NonZeroUsize>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            accept_language: DEFAULT_ACCEPT_LANGUAGE.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: DEFAULT_TIMEOUT,
            cache_ttl: DEFAULT_CACHE_TTL,
            cache_capacity: None,
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_accept_language(mut self, accept_language: impl Into<String>) -> Self {
        self.accept_language = accept_language.into();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_cache_ttl(mut self, cache_ttl: Duration) -> Self {
        self.cache_ttl = cache_ttl;
        self
    }

    pub fn with_cache_capacity(mut self, capacity: NonZeroUsize) -> Self {
        self.cache_capacity = Some(capacity);
        self
    }
}
