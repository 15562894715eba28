//! Credential caching
//!
//! The token-provider side of the client: a single-slot in-memory cache
//! with a fixed TTL, invalidated explicitly on logout and organization
//! switch.

mod credential_cache;

pub use credential_cache::CredentialCache;
