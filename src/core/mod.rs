//! Core building blocks of the request primitive
//!
//! - `cache`: in-memory response cache with time-to-live expiry
//! - `http`: fixed request headers, URL joining and payload decoding

pub mod cache;
pub mod http;

// Re-export commonly used items for convenience
pub use cache::ResponseCache;
pub use http::{decode_payload, default_header_map, endpoint_url};
