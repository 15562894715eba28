//! Auth collaborator port

use async_trait::async_trait;
use facture_domain::IssuedToken;
use thiserror::Error;

/// Failures reported by the auth collaborator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthGatewayError {
    /// The collaborator holds no session for this client.
    #[error("no active session")]
    NoSession,

    /// The collaborator could not be reached.
    #[error("auth service unreachable: {0}")]
    Network(String),

    /// The collaborator answered with something unparseable.
    #[error("malformed auth response: {0}")]
    Protocol(String),
}

/// Port to the external authentication collaborator.
///
/// Session identity itself rides an httpOnly cookie owned entirely by the
/// adapter; the client core only ever sees issued bearer tokens.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Requests a bearer token for the current session.
    async fn fetch_token(&self) -> Result<IssuedToken, AuthGatewayError>;

    /// Terminates the session. Best-effort; callers ignore failures.
    async fn sign_out(&self) -> Result<(), AuthGatewayError>;

    /// Whether the collaborator still holds a session for this client.
    async fn has_session(&self) -> bool;
}
