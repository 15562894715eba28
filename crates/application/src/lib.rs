//! Facture Application - Client core and ports
//!
//! This crate owns the authenticated HTTP client core (single-flight
//! credential refresh, request replay), the in-memory credential cache, the
//! error normalizer, and the typed resource surface. External systems are
//! reached only through the ports defined here; adapters live in the
//! infrastructure crate.

pub mod api;
pub mod auth;
pub mod client;
pub mod config;
pub mod ports;

#[cfg(test)]
mod testutil;

pub use api::{
    CustomersApi, DashboardApi, FactureApi, InvoicesApi, OrganizationsApi, ProductsApi, QuotesApi,
};
pub use auth::CredentialCache;
pub use client::{ApiClient, ErrorNormalizer};
pub use config::{ClientConfig, ConfigError};
pub use ports::{
    AuthGateway, AuthGatewayError, Clock, Navigator, Notifier, Transport, TransportError,
};
