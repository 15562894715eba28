//! HTTP transport port

use async_trait::async_trait;
use facture_domain::{ApiRequest, ApiResponse};
use thiserror::Error;

/// Failures raised while performing one HTTP exchange.
///
/// Setup failures (`InvalidUrl`, `Encode`) mean the call never left the
/// process; the remaining variants mean no usable response arrived.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The request URL could not be built from the base URL and path.
    #[error("invalid request URL: {0}")]
    InvalidUrl(String),

    /// The request body could not be encoded.
    #[error("failed to encode request body: {0}")]
    Encode(String),

    /// No response arrived within the configured timeout.
    #[error("request timed out after {timeout_ms} ms")]
    Timeout {
        /// The timeout that elapsed.
        timeout_ms: u64,
    },

    /// The connection could not be established or broke mid-exchange.
    #[error("connection failed: {0}")]
    Connection(String),

    /// The response body could not be read.
    #[error("failed to read response body: {0}")]
    BodyRead(String),
}

/// Port that performs one HTTP exchange.
///
/// Implementations attach the given bearer token, transmit the request, and
/// hand back whatever arrived. They carry no auth or retry semantics of
/// their own; status-code handling belongs to the client core.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends one request, optionally authenticated with a bearer token.
    async fn send(
        &self,
        request: &ApiRequest,
        bearer: Option<&str>,
    ) -> Result<ApiResponse, TransportError>;
}
