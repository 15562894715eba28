//! Raw HTTP exchange result

use std::collections::HashMap;

use serde::de::DeserializeOwned;

/// The raw result of one HTTP exchange: status, headers, body bytes.
///
/// Typed decoding happens at the resource surface; the client core only
/// inspects the status code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response headers, last value wins on duplicates.
    pub headers: HashMap<String, String>,
    /// Raw body bytes.
    pub body: Vec<u8>,
}

impl ApiResponse {
    /// Creates a response.
    #[must_use]
    pub const fn new(status: u16, headers: HashMap<String, String>, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Whether the status is in the 2xx range.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Decodes the body as JSON.
    ///
    /// # Errors
    /// Returns the underlying decode error if the body is not valid JSON for
    /// the target type.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }

    /// Best-effort human-readable failure message.
    ///
    /// Prefers the backend's `message` (or `error`) body field; falls back
    /// to the bare status code.
    #[must_use]
    pub fn error_message(&self) -> String {
        if let Ok(value) = serde_json::from_slice::<serde_json::Value>(&self.body)
            && let Some(message) = value
                .get("message")
                .or_else(|| value.get("error"))
                .and_then(serde_json::Value::as_str)
        {
            return message.to_string();
        }
        format!("request failed with HTTP {}", self.status)
    }
}
