//! Organizations endpoint surface
#![allow(clippy::missing_errors_doc)]

use std::sync::Arc;

use facture_domain::{
    ApiResult, OnboardingLink, OnboardingStatus, Organization, OrganizationInput,
};
use uuid::Uuid;

use crate::client::ApiClient;

/// Typed access to `/organizations`, including Stripe onboarding.
pub struct OrganizationsApi {
    client: Arc<ApiClient>,
}

impl OrganizationsApi {
    /// Creates the surface over a shared client.
    #[must_use]
    pub const fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Lists the organizations the signed-in user belongs to.
    pub async fn list(&self) -> ApiResult<Vec<Organization>> {
        self.client.get_json("/organizations").await
    }

    /// Fetches one organization.
    pub async fn get(&self, id: Uuid) -> ApiResult<Organization> {
        self.client.get_json(&format!("/organizations/{id}")).await
    }

    /// Creates an organization.
    pub async fn create(&self, input: &OrganizationInput) -> ApiResult<Organization> {
        self.client.post_json("/organizations", input).await
    }

    /// Updates an organization.
    pub async fn update(&self, id: Uuid, input: &OrganizationInput) -> ApiResult<Organization> {
        self.client
            .put_json(&format!("/organizations/{id}"), input)
            .await
    }

    /// Makes the organization the caller's active tenant.
    ///
    /// The cached credential embeds organization-scoped claims, so it is
    /// invalidated after the switch; the next request fetches a token for
    /// the new tenant.
    pub async fn switch_active(&self, id: Uuid) -> ApiResult<Organization> {
        let organization = self
            .client
            .post_action(&format!("/organizations/{id}/switch"))
            .await?;
        self.client.invalidate_credentials().await;
        Ok(organization)
    }

    /// Requests a hosted Stripe onboarding session for the organization.
    pub async fn stripe_onboarding_link(&self, id: Uuid) -> ApiResult<OnboardingLink> {
        self.client
            .post_action(&format!("/organizations/{id}/stripe/onboarding"))
            .await
    }

    /// Reads the organization's Stripe onboarding progress.
    pub async fn stripe_onboarding_status(&self, id: Uuid) -> ApiResult<OnboardingStatus> {
        self.client
            .get_json(&format!("/organizations/{id}/stripe/status"))
            .await
    }
}
