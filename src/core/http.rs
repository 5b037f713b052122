//! HTTP utilities for Transfermarkt API communication

use crate::{ClientConfig, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, USER_AGENT};
use serde_json::Value;

/// Build the header set sent with every request.
pub fn default_header_map(config: &ClientConfig) -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    h.insert(
        ACCEPT_LANGUAGE,
        HeaderValue::from_str(&config.accept_language)?,
    );
    h.insert(USER_AGENT, HeaderValue::from_str(&config.user_agent)?);
    Ok(h)
}

/// Join the base address and an endpoint key with exactly one `/`.
pub fn endpoint_url(base_url: &str, endpoint: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        endpoint.trim_start_matches('/')
    )
}

/// Decode a successful response body. Bodies that are not JSON are kept as
/// a JSON string holding the raw text.
pub fn decode_payload(body: String) -> Value {
    match serde_json::from_str(&body) {
        Ok(value) => value,
        Err(_) => Value::String(body),
    }
}
