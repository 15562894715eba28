//! Dashboard endpoint surface
#![allow(clippy::missing_errors_doc)]

use std::sync::Arc;

use facture_domain::{ApiResult, DashboardMetrics};

use crate::client::ApiClient;

/// Typed access to `/dashboard`.
pub struct DashboardApi {
    client: Arc<ApiClient>,
}

impl DashboardApi {
    /// Creates the surface over a shared client.
    #[must_use]
    pub const fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Fetches the aggregated billing metrics snapshot.
    pub async fn metrics(&self) -> ApiResult<DashboardMetrics> {
        self.client.get_json("/dashboard/metrics").await
    }
}
