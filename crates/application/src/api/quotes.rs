//! Quotes endpoint surface
#![allow(clippy::missing_errors_doc)]

use std::sync::Arc;

use facture_domain::{ApiRequest, ApiResult, Invoice, Quote, QuoteInput, QuoteStatus};
use uuid::Uuid;

use crate::client::ApiClient;

/// Typed access to `/quotes`.
pub struct QuotesApi {
    client: Arc<ApiClient>,
}

impl QuotesApi {
    /// Creates the surface over a shared client.
    #[must_use]
    pub const fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Lists quotes, optionally filtered by status.
    pub async fn list(&self, status: Option<QuoteStatus>) -> ApiResult<Vec<Quote>> {
        let mut request = ApiRequest::get("/quotes");
        if let Some(status) = status {
            request = request.with_query("status", status.as_str());
        }
        self.client.send_json(&request).await
    }

    /// Fetches one quote.
    pub async fn get(&self, id: Uuid) -> ApiResult<Quote> {
        self.client.get_json(&format!("/quotes/{id}")).await
    }

    /// Creates a draft quote.
    pub async fn create(&self, input: &QuoteInput) -> ApiResult<Quote> {
        self.client.post_json("/quotes", input).await
    }

    /// Updates a draft quote.
    pub async fn update(&self, id: Uuid, input: &QuoteInput) -> ApiResult<Quote> {
        self.client.put_json(&format!("/quotes/{id}"), input).await
    }

    /// Deletes a quote.
    pub async fn delete(&self, id: Uuid) -> ApiResult<()> {
        self.client.delete(&format!("/quotes/{id}")).await
    }

    /// Converts an accepted quote into a draft invoice.
    pub async fn convert_to_invoice(&self, id: Uuid) -> ApiResult<Invoice> {
        self.client
            .post_action(&format!("/quotes/{id}/convert"))
            .await
    }
}
