//! Facture Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports defined in the
//! application layer: the reqwest-backed transport and auth gateway, the
//! system clock, and a tracing-backed notifier for headless embedders.

pub mod adapters;
pub mod auth;

pub use adapters::{ReqwestTransport, SystemClock, TracingNotifier};
pub use auth::RestAuthGateway;
