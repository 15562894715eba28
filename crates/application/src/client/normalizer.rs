//! Error normalizer
//!
//! Maps failed exchanges to the stable [`ApiError`] taxonomy and raises the
//! user-facing toast. Pure mapping otherwise: no retries, no credential or
//! refresh-state mutation.

use std::sync::Arc;

use facture_domain::{ApiError, ApiResponse};

use crate::ports::{Notifier, TransportError};

/// Normalizes failed exchanges and surfaces them to the notifier.
///
/// Every kind is surfaced except `Unauthorized`: a first 401 is being healed
/// silently, and an unrecoverable one surfaces as a navigation instead.
pub struct ErrorNormalizer {
    notifier: Arc<dyn Notifier>,
}

impl ErrorNormalizer {
    /// Creates a normalizer raising toasts on the given notifier.
    #[must_use]
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self { notifier }
    }

    /// Normalizes a non-2xx response.
    #[must_use]
    pub fn status(&self, response: &ApiResponse) -> ApiError {
        let error = ApiError::from_status(response.status, response.error_message());
        self.surface(&error);
        error
    }

    /// Normalizes a transport-level failure.
    #[must_use]
    pub fn transport(&self, error: &TransportError) -> ApiError {
        let normalized = match error {
            TransportError::InvalidUrl(m) | TransportError::Encode(m) => {
                ApiError::RequestSetup(m.clone())
            }
            TransportError::Timeout { timeout_ms } => {
                ApiError::Transport(format!("timed out after {timeout_ms} ms"))
            }
            TransportError::Connection(m) | TransportError::BodyRead(m) => {
                ApiError::Transport(m.clone())
            }
        };
        self.surface(&normalized);
        normalized
    }

    /// Normalizes a 2xx body that failed to decode.
    #[must_use]
    pub fn decode(&self, error: &serde_json::Error) -> ApiError {
        let normalized = ApiError::Server(format!("malformed response body: {error}"));
        self.surface(&normalized);
        normalized
    }

    /// Normalizes a request that could not be built.
    #[must_use]
    pub fn setup(&self, message: impl Into<String>) -> ApiError {
        let normalized = ApiError::RequestSetup(message.into());
        self.surface(&normalized);
        normalized
    }

    fn surface(&self, error: &ApiError) {
        if error.is_unauthorized() {
            return;
        }
        tracing::debug!(%error, "surfacing request failure");
        self.notifier.notify(&error.toast());
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::testutil::RecordingNotifier;
    use std::collections::HashMap;

    fn normalizer() -> (ErrorNormalizer, Arc<RecordingNotifier>) {
        let notifier = Arc::new(RecordingNotifier::default());
        let normalizer = ErrorNormalizer::new(Arc::clone(&notifier) as Arc<dyn Notifier>);
        (normalizer, notifier)
    }

    fn response(status: u16, body: &str) -> ApiResponse {
        ApiResponse::new(status, HashMap::new(), body.as_bytes().to_vec())
    }

    #[test]
    fn test_status_maps_and_notifies_once() {
        let (normalizer, notifier) = normalizer();

        let error = normalizer.status(&response(404, r#"{"message": "no such invoice"}"#));

        assert_eq!(error, ApiError::NotFound("no such invoice".to_string()));
        let toasts = notifier.toasts();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].title, "Not found");
    }

    #[test]
    fn test_unauthorized_is_never_toasted() {
        let (normalizer, notifier) = normalizer();

        let error = normalizer.status(&response(401, "{}"));

        assert_eq!(error, ApiError::Unauthorized);
        assert!(notifier.toasts().is_empty());
    }

    #[test]
    fn test_timeout_maps_to_transport() {
        let (normalizer, notifier) = normalizer();

        let error = normalizer.transport(&TransportError::Timeout { timeout_ms: 15_000 });

        assert!(matches!(error, ApiError::Transport(_)));
        assert_eq!(notifier.toasts().len(), 1);
        assert_eq!(notifier.toasts()[0].title, "Network error");
    }

    #[test]
    fn test_setup_failures_map_to_request_setup() {
        let (normalizer, notifier) = normalizer();

        let error = normalizer.transport(&TransportError::InvalidUrl("bad path".to_string()));

        assert_eq!(error, ApiError::RequestSetup("bad path".to_string()));
        assert_eq!(notifier.toasts().len(), 1);
    }
}
