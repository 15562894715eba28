//! Authenticated HTTP client core
//!
//! [`ApiClient`] wraps a transport with bearer-credential attachment,
//! single-flight token refresh with request replay, and error
//! normalization.

mod api_client;
mod normalizer;
mod refresh;

pub use api_client::ApiClient;
pub use normalizer::ErrorNormalizer;
