use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Result of the deal margin worksheet.
///
/// Derived entirely from [`DealInputs`](crate::models::DealInputs), the
/// advanced-cost flag and the minimum floor. Recomputed on every read and
/// never persisted, so it can never go stale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarginResult {
    /// Costs counted against the deal (line 1).
    pub total_expenses: Decimal,

    /// Amount withheld for taxes (line 2).
    pub tax_amount: Decimal,

    /// What is actually left after costs and taxes (line 3). May be negative.
    pub net_revenue: Decimal,

    /// Baseline hours plus the revision surcharge (line 4). May be zero.
    pub total_hours: Decimal,

    /// Net revenue per hour of labor (line 5). Zero when there are no hours.
    pub effective_rate: Decimal,

    /// Whether the effective rate meets the minimum floor (line 6).
    pub is_approved: bool,
}
