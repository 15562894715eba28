//! Products endpoint surface
#![allow(clippy::missing_errors_doc)]

use std::sync::Arc;

use facture_domain::{ApiResult, Product, ProductInput};
use uuid::Uuid;

use crate::client::ApiClient;

/// Typed access to `/products`.
pub struct ProductsApi {
    client: Arc<ApiClient>,
}

impl ProductsApi {
    /// Creates the surface over a shared client.
    #[must_use]
    pub const fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Lists the product catalog.
    pub async fn list(&self) -> ApiResult<Vec<Product>> {
        self.client.get_json("/products").await
    }

    /// Fetches one product.
    pub async fn get(&self, id: Uuid) -> ApiResult<Product> {
        self.client.get_json(&format!("/products/{id}")).await
    }

    /// Creates a product.
    pub async fn create(&self, input: &ProductInput) -> ApiResult<Product> {
        self.client.post_json("/products", input).await
    }

    /// Updates a product.
    pub async fn update(&self, id: Uuid, input: &ProductInput) -> ApiResult<Product> {
        self.client
            .put_json(&format!("/products/{id}"), input)
            .await
    }

    /// Deletes a product.
    pub async fn delete(&self, id: Uuid) -> ApiResult<()> {
        self.client.delete(&format!("/products/{id}")).await
    }
}
