use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// User-provided terms of a single freelance deal.
///
/// All fields are expected to be non-negative in normal use, but nothing
/// enforces it: the worksheet computes whatever the numbers say. Field names
/// serialize in camelCase to match the persisted snapshot contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealInputs {
    /// Gross payment offered for the deal.
    pub deal_amount: Decimal,

    /// Baseline labor hours (filming, editing, admin).
    pub estimated_hours: Decimal,

    /// Revision rounds; each adds a fixed two-hour surcharge.
    pub revisions: Decimal,

    /// Direct costs counted against every deal (props, contractors).
    pub expenses: Decimal,

    /// Percentage of the gross withheld for taxes. 0-100 expected, unclamped.
    pub tax_rate: Decimal,

    /// Software subscription costs. Only counted in advanced-cost mode.
    pub software_costs: Decimal,

    /// Agency fees. Only counted in advanced-cost mode.
    pub agency_fees: Decimal,
}

impl Default for DealInputs {
    /// Starting values for a fresh session: a $5,000 deal over 10 hours at a
    /// 30% tax rate, everything else zero.
    fn default() -> Self {
        Self {
            deal_amount: Decimal::from(5000),
            estimated_hours: Decimal::from(10),
            revisions: Decimal::ZERO,
            expenses: Decimal::ZERO,
            tax_rate: Decimal::from(30),
            software_costs: Decimal::ZERO,
            agency_fees: Decimal::ZERO,
        }
    }
}
