//! Billing resource models
//!
//! Serde-derived payload types for the backend's resource endpoints. Field
//! names follow the backend's camelCase JSON. Monetary amounts are integer
//! cents; totals are computed server-side and carried verbatim.

mod customer;
mod dashboard;
mod invoice;
mod organization;
mod product;
mod quote;

pub use customer::{Address, Customer, CustomerInput};
pub use dashboard::DashboardMetrics;
pub use invoice::{Invoice, InvoiceInput, InvoiceStatus, LineItem};
pub use organization::{OnboardingLink, OnboardingStatus, Organization, OrganizationInput};
pub use product::{Product, ProductInput};
pub use quote::{Quote, QuoteInput, QuoteStatus};
