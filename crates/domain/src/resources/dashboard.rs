//! Dashboard metrics model

use serde::{Deserialize, Serialize};

/// Aggregated billing metrics for the dashboard, computed server-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    /// Revenue collected in the current period, in cents.
    pub revenue_cents: i64,
    /// Total of finalized but unpaid invoices, in cents.
    pub outstanding_cents: i64,
    /// Number of overdue invoices.
    pub overdue_invoices: u32,
    /// Number of quotes awaiting a customer decision.
    pub open_quotes: u32,
    /// Total customer count.
    pub customers: u32,
}
