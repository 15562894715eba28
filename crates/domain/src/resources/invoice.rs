//! Invoice models

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle states of an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    /// Editable, not yet numbered.
    Draft,
    /// Numbered and sent; immutable on the backend.
    Finalized,
    /// Payment received.
    Paid,
    /// Past its due date without payment.
    Overdue,
    /// Voided.
    Cancelled,
}

impl InvoiceStatus {
    /// Wire name of the status, as used in query filters.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Finalized => "finalized",
            Self::Paid => "paid",
            Self::Overdue => "overdue",
            Self::Cancelled => "cancelled",
        }
    }
}

/// One billable line on an invoice or quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Product this line was created from, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<Uuid>,
    /// Line description.
    pub description: String,
    /// Quantity.
    pub quantity: u32,
    /// Unit price in cents.
    pub unit_price_cents: i64,
}

/// An invoice as returned by the backend.
///
/// Totals are computed server-side and never recomputed here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    /// Unique identifier.
    pub id: Uuid,
    /// Sequential invoice number, assigned on finalization.
    #[serde(default)]
    pub number: Option<String>,
    /// Customer the invoice bills.
    pub customer_id: Uuid,
    /// Lifecycle state.
    pub status: InvoiceStatus,
    /// ISO currency code.
    pub currency: String,
    /// Billable lines.
    #[serde(default)]
    pub lines: Vec<LineItem>,
    /// Total including tax, in cents, computed server-side.
    pub total_cents: i64,
    /// Issue date, set on finalization.
    #[serde(default)]
    pub issued_on: Option<NaiveDate>,
    /// Due date.
    #[serde(default)]
    pub due_on: Option<NaiveDate>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last-update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating or updating a draft invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceInput {
    /// Customer to bill.
    pub customer_id: Uuid,
    /// ISO currency code.
    pub currency: String,
    /// Billable lines.
    pub lines: Vec<LineItem>,
    /// Optional due date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_on: Option<NaiveDate>,
}
