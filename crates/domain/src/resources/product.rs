//! Product catalog models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A catalog product or service used to prefill invoice and quote lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
    /// Unit price in cents.
    pub unit_price_cents: i64,
    /// ISO currency code.
    pub currency: String,
    /// Tax rate applied on top of the unit price, in percent.
    #[serde(default)]
    pub tax_rate_percent: Option<f64>,
    /// Hidden from pickers when true.
    #[serde(default)]
    pub archived: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last-update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating or updating a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    /// Display name.
    pub name: String,
    /// Optional description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Unit price in cents.
    pub unit_price_cents: i64,
    /// ISO currency code.
    pub currency: String,
    /// Optional tax rate in percent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_rate_percent: Option<f64>,
}
