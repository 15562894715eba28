//! Customers endpoint surface
#![allow(clippy::missing_errors_doc)]

use std::sync::Arc;

use facture_domain::{ApiResult, Customer, CustomerInput};
use uuid::Uuid;

use crate::client::ApiClient;

/// Typed access to `/customers`.
pub struct CustomersApi {
    client: Arc<ApiClient>,
}

impl CustomersApi {
    /// Creates the surface over a shared client.
    #[must_use]
    pub const fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Lists the active organization's customers.
    pub async fn list(&self) -> ApiResult<Vec<Customer>> {
        self.client.get_json("/customers").await
    }

    /// Fetches one customer.
    pub async fn get(&self, id: Uuid) -> ApiResult<Customer> {
        self.client.get_json(&format!("/customers/{id}")).await
    }

    /// Creates a customer.
    pub async fn create(&self, input: &CustomerInput) -> ApiResult<Customer> {
        self.client.post_json("/customers", input).await
    }

    /// Updates a customer.
    pub async fn update(&self, id: Uuid, input: &CustomerInput) -> ApiResult<Customer> {
        self.client
            .put_json(&format!("/customers/{id}"), input)
            .await
    }

    /// Deletes a customer.
    pub async fn delete(&self, id: Uuid) -> ApiResult<()> {
        self.client.delete(&format!("/customers/{id}")).await
    }
}
