//! Fetch gateway for remote JSON data
//!
//! Every outbound request for catalog and user data passes through a single
//! [`Gateway`]. It keeps an in-memory cache keyed by a request fingerprint
//! (URL plus serialized request options), serves entries while they are
//! younger than the freshness window, and bounds each network call with a
//! timeout. Expiry is checked lazily on read; nothing runs in the background.

mod cache;
mod client;
mod error;
mod transport;

pub use cache::{fingerprint, CacheEntry, RequestCache};
pub use client::{Gateway, GatewayConfig, DEFAULT_FRESHNESS_WINDOW, DEFAULT_TIMEOUT};
pub use error::FetchError;
pub use transport::{HttpMethod, HttpTransport, RawResponse, RequestOptions, Transport};

#[cfg(test)]
pub(crate) use transport::testing;
