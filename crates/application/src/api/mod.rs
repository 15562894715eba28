//! Typed resource surface
//!
//! Thin per-resource wrappers over [`ApiClient`]. They only shape paths and
//! payloads; auth, refresh, and error normalization all happen in the
//! client core.

mod customers;
mod dashboard;
mod invoices;
mod organizations;
mod products;
mod quotes;

use std::sync::Arc;

use crate::client::ApiClient;

pub use customers::CustomersApi;
pub use dashboard::DashboardApi;
pub use invoices::InvoicesApi;
pub use organizations::OrganizationsApi;
pub use products::ProductsApi;
pub use quotes::QuotesApi;

/// All resource surfaces over one shared client.
pub struct FactureApi {
    /// `/customers` endpoints.
    pub customers: CustomersApi,
    /// `/invoices` endpoints.
    pub invoices: InvoicesApi,
    /// `/quotes` endpoints.
    pub quotes: QuotesApi,
    /// `/products` endpoints.
    pub products: ProductsApi,
    /// `/organizations` endpoints, including Stripe onboarding.
    pub organizations: OrganizationsApi,
    /// `/dashboard` endpoints.
    pub dashboard: DashboardApi,
}

impl FactureApi {
    /// Builds every resource surface over the given client.
    #[must_use]
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            customers: CustomersApi::new(Arc::clone(&client)),
            invoices: InvoicesApi::new(Arc::clone(&client)),
            quotes: QuotesApi::new(Arc::clone(&client)),
            products: ProductsApi::new(Arc::clone(&client)),
            organizations: OrganizationsApi::new(Arc::clone(&client)),
            dashboard: DashboardApi::new(client),
        }
    }
}
