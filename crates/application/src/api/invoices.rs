//! Invoices endpoint surface
#![allow(clippy::missing_errors_doc)]

use std::sync::Arc;

use facture_domain::{ApiRequest, ApiResult, Invoice, InvoiceInput, InvoiceStatus};
use uuid::Uuid;

use crate::client::ApiClient;

/// Typed access to `/invoices`.
pub struct InvoicesApi {
    client: Arc<ApiClient>,
}

impl InvoicesApi {
    /// Creates the surface over a shared client.
    #[must_use]
    pub const fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Lists invoices, optionally filtered by status.
    pub async fn list(&self, status: Option<InvoiceStatus>) -> ApiResult<Vec<Invoice>> {
        let mut request = ApiRequest::get("/invoices");
        if let Some(status) = status {
            request = request.with_query("status", status.as_str());
        }
        self.client.send_json(&request).await
    }

    /// Fetches one invoice.
    pub async fn get(&self, id: Uuid) -> ApiResult<Invoice> {
        self.client.get_json(&format!("/invoices/{id}")).await
    }

    /// Creates a draft invoice.
    pub async fn create(&self, input: &InvoiceInput) -> ApiResult<Invoice> {
        self.client.post_json("/invoices", input).await
    }

    /// Updates a draft invoice.
    pub async fn update(&self, id: Uuid, input: &InvoiceInput) -> ApiResult<Invoice> {
        self.client
            .put_json(&format!("/invoices/{id}"), input)
            .await
    }

    /// Deletes a draft invoice.
    pub async fn delete(&self, id: Uuid) -> ApiResult<()> {
        self.client.delete(&format!("/invoices/{id}")).await
    }

    /// Finalizes a draft, assigning its sequential number server-side.
    pub async fn finalize(&self, id: Uuid) -> ApiResult<Invoice> {
        self.client
            .post_action(&format!("/invoices/{id}/finalize"))
            .await
    }

    /// Downloads the rendered PDF as opaque bytes.
    pub async fn download_pdf(&self, id: Uuid) -> ApiResult<Vec<u8>> {
        self.client.get_bytes(&format!("/invoices/{id}/pdf")).await
    }
}
