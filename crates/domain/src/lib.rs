//! Facture Domain - Core billing client types
//!
//! This crate defines the domain model for the Facture billing client.
//! All types here are pure Rust with no I/O dependencies.

pub mod auth;
pub mod error;
pub mod notification;
pub mod request;
pub mod resources;
pub mod response;

pub use auth::{Credential, IssuedToken};
pub use error::{ApiError, ApiResult};
pub use notification::{Severity, Toast};
pub use request::{ApiRequest, HttpMethod};
pub use resources::{
    Address, Customer, CustomerInput, DashboardMetrics, Invoice, InvoiceInput, InvoiceStatus,
    LineItem, OnboardingLink, OnboardingStatus, Organization, OrganizationInput, Product,
    ProductInput, Quote, QuoteInput, QuoteStatus,
};
pub use response::ApiResponse;
