//! Client configuration

use thiserror::Error;
use url::Url;

/// Default per-request timeout.
const DEFAULT_TIMEOUT_MS: u64 = 15_000;

/// Default credential TTL, kept under the backend token lifetime so a cached
/// credential goes stale client-side before it is rejected server-side.
const DEFAULT_CREDENTIAL_TTL_SECONDS: i64 = 240;

/// Configuration errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The base URL did not parse.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

/// Static configuration supplied at process start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend base URL, e.g. `https://api.facture.example`.
    pub base_url: Url,
    /// Per-request timeout in milliseconds.
    pub timeout_ms: u64,
    /// Client-side credential TTL in seconds.
    pub credential_ttl_seconds: i64,
}

impl ClientConfig {
    /// Creates a configuration with the default timeout and credential TTL.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL does not parse.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ConfigError::InvalidBaseUrl(format!("{e}: {base_url}")))?;
        Ok(Self {
            base_url,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            credential_ttl_seconds: DEFAULT_CREDENTIAL_TTL_SECONDS,
        })
    }

    /// Overrides the per-request timeout.
    #[must_use]
    pub const fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Overrides the credential TTL.
    #[must_use]
    pub const fn with_credential_ttl_seconds(mut self, seconds: i64) -> Self {
        self.credential_ttl_seconds = seconds;
        self
    }
}
