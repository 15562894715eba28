//! Organization and Stripe onboarding models
//!
//! An organization is the tenant boundary: issued tokens embed
//! organization-scoped claims, which is why switching the active
//! organization must invalidate any cached credential.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::customer::Address;

/// A tenant organization the signed-in user belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    /// Unique identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Registered legal name.
    #[serde(default)]
    pub legal_name: Option<String>,
    /// Registered address.
    #[serde(default)]
    pub address: Option<Address>,
    /// Whether this is the caller's currently active organization.
    #[serde(default)]
    pub active: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last-update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating or updating an organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationInput {
    /// Display name.
    pub name: String,
    /// Registered legal name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legal_name: Option<String>,
    /// Registered address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
}

/// A hosted Stripe onboarding session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingLink {
    /// URL to open in the browser.
    pub url: String,
    /// Instant after which the link stops working.
    pub expires_at: DateTime<Utc>,
}

/// Progress of the organization's Stripe onboarding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingStatus {
    /// The organization completed the Stripe questionnaire.
    pub details_submitted: bool,
    /// Stripe accepts charges for this organization.
    pub charges_enabled: bool,
    /// Stripe pays out to the organization's bank account.
    pub payouts_enabled: bool,
}

impl OnboardingStatus {
    /// Whether onboarding is fully complete.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.details_submitted && self.charges_enabled && self.payouts_enabled
    }
}
