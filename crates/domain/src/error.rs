//! Client error taxonomy

use thiserror::Error;

use crate::notification::Toast;

/// Stable error kinds for a failed API exchange.
///
/// Every failure the client surfaces is normalized to one of these kinds
/// exactly once before it reaches the caller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Authorization was rejected and could not be recovered by a refresh.
    #[error("session expired")]
    Unauthorized,

    /// Authenticated but not permitted to perform the operation.
    #[error("permission denied: {0}")]
    Forbidden(String),

    /// The requested resource does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// The backend reported a fault or broke its response contract.
    #[error("server error: {0}")]
    Server(String),

    /// No response was received (timeout, DNS failure, connection failure).
    #[error("network failure: {0}")]
    Transport(String),

    /// The outbound request could not be constructed.
    #[error("invalid request: {0}")]
    RequestSetup(String),
}

impl ApiError {
    /// Classifies a non-2xx HTTP status.
    ///
    /// Statuses outside the taxonomy (400, 409, 422, ...) are treated as the
    /// backend breaking its contract and land in [`ApiError::Server`] with
    /// the backend's own message preserved.
    #[must_use]
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            401 => Self::Unauthorized,
            403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            _ => Self::Server(message),
        }
    }

    /// Short title for user-facing display.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Unauthorized => "Session expired",
            Self::Forbidden(_) => "Permission denied",
            Self::NotFound(_) => "Not found",
            Self::Server(_) => "Something went wrong",
            Self::Transport(_) => "Network error",
            Self::RequestSetup(_) => "Request failed",
        }
    }

    /// Builds the toast payload for this error.
    #[must_use]
    pub fn toast(&self) -> Toast {
        let description = match self {
            Self::Unauthorized => "Please sign in again.".to_string(),
            Self::Forbidden(m) | Self::NotFound(m) | Self::Server(m) => m.clone(),
            Self::Transport(_) => "Could not reach the server. Check your connection.".to_string(),
            Self::RequestSetup(m) => m.clone(),
        };
        Toast::error(self.title(), description)
    }

    /// Returns true for the kind that triggers a forced logout.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}

/// Result type alias for client operations.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_taxonomy() {
        assert_eq!(ApiError::from_status(401, String::new()), ApiError::Unauthorized);
        assert!(matches!(
            ApiError::from_status(403, "nope".into()),
            ApiError::Forbidden(_)
        ));
        assert!(matches!(
            ApiError::from_status(404, "gone".into()),
            ApiError::NotFound(_)
        ));
        assert!(matches!(
            ApiError::from_status(500, "boom".into()),
            ApiError::Server(_)
        ));
        // Statuses outside the taxonomy are a contract breach
        assert!(matches!(
            ApiError::from_status(422, "invalid".into()),
            ApiError::Server(_)
        ));
    }

    #[test]
    fn test_toast_carries_backend_message() {
        let error = ApiError::Forbidden("cannot delete invoices".to_string());
        let toast = error.toast();
        assert_eq!(toast.title, "Permission denied");
        assert_eq!(toast.description, "cannot delete invoices");
    }

    #[test]
    fn test_transport_toast_hides_internals() {
        let error = ApiError::Transport("dns lookup failed for api.internal".to_string());
        let toast = error.toast();
        assert!(!toast.description.contains("api.internal"));
    }

    #[test]
    fn test_is_unauthorized() {
        assert!(ApiError::Unauthorized.is_unauthorized());
        assert!(!ApiError::NotFound("x".into()).is_unauthorized());
    }
}
