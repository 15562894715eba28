//! Bearer credential types
//!
//! Credentials live only in process memory. Persisting them anywhere is a
//! deliberate non-feature to keep the credential-theft surface small.

use chrono::{DateTime, Utc};

/// A bearer token proving identity to the backend, with a client-side expiry.
///
/// The expiry instant is set by the credential cache from its own fixed TTL,
/// kept shorter than the token's real lifetime as a safety margin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    /// The opaque bearer token string.
    pub token: String,
    /// Instant after which the cache treats this credential as stale.
    pub expires_at: DateTime<Utc>,
}

impl Credential {
    /// Creates a credential expiring at the given instant.
    #[must_use]
    pub fn new(token: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self {
            token: token.into(),
            expires_at,
        }
    }

    /// Whether the credential is stale at the given instant.
    #[must_use]
    pub fn is_stale(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Returns the Authorization header value.
    #[must_use]
    pub fn authorization_header(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

/// A token as handed out by the auth collaborator.
///
/// Carries only the token string; the credential cache applies its own TTL
/// rather than trusting a server-reported expiry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    /// The opaque bearer token string.
    pub token: String,
}

impl IssuedToken {
    /// Wraps a raw token string.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}
