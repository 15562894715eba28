//! Quote models

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::invoice::LineItem;

/// Lifecycle states of a quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteStatus {
    /// Editable.
    Draft,
    /// Sent to the customer.
    Sent,
    /// Accepted by the customer; convertible to an invoice.
    Accepted,
    /// Declined by the customer.
    Declined,
    /// Past its validity date.
    Expired,
}

impl QuoteStatus {
    /// Wire name of the status, as used in query filters.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Sent => "sent",
            Self::Accepted => "accepted",
            Self::Declined => "declined",
            Self::Expired => "expired",
        }
    }
}

/// A quote as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    /// Unique identifier.
    pub id: Uuid,
    /// Sequential quote number.
    #[serde(default)]
    pub number: Option<String>,
    /// Customer the quote is addressed to.
    pub customer_id: Uuid,
    /// Lifecycle state.
    pub status: QuoteStatus,
    /// ISO currency code.
    pub currency: String,
    /// Quoted lines.
    #[serde(default)]
    pub lines: Vec<LineItem>,
    /// Total including tax, in cents, computed server-side.
    pub total_cents: i64,
    /// Date the quote stops being valid.
    #[serde(default)]
    pub valid_until: Option<NaiveDate>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last-update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating or updating a draft quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteInput {
    /// Customer to address.
    pub customer_id: Uuid,
    /// ISO currency code.
    pub currency: String,
    /// Quoted lines.
    pub lines: Vec<LineItem>,
    /// Optional validity date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<NaiveDate>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_status_round_trip() {
        let encoded = serde_json::to_string(&QuoteStatus::Accepted).unwrap();
        assert_eq!(encoded, r#""accepted""#);
        let decoded: QuoteStatus = serde_json::from_str(r#""declined""#).unwrap();
        assert_eq!(decoded, QuoteStatus::Declined);
    }
}
