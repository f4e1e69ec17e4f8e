//! Deal margin worksheet: the effective hourly rate behind a deal.
//!
//! This module answers the one question the simulator exists for: after
//! costs and taxes, what does an hour of work on this deal actually pay,
//! and does that clear the user's minimum floor?
//!
//! # Worksheet Structure
//!
//! | Line | Description |
//! |------|-------------|
//! | 1    | Total expenses (direct costs, plus software and agency costs in advanced mode) |
//! | 2    | Tax amount (deal amount × tax rate / 100) |
//! | 3    | Net revenue (deal amount - Line 1 - Line 2) |
//! | 4    | Total hours (estimated hours + 2 per revision round) |
//! | 5    | Effective hourly rate (Line 3 / Line 4, or 0 when Line 4 is 0) |
//! | 6    | Verdict (approved when Line 5 ≥ minimum floor, boundary inclusive) |
//!
//! Every line is a pure function of the inputs. Nothing is clamped: a deal
//! can have negative net revenue and a negative effective rate, and the
//! verdict will read accordingly. The only guard is the zero-hour case,
//! which is defined as rate 0.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use deal_core::calculations::MarginWorksheet;
//! use deal_core::models::DealInputs;
//!
//! let inputs = DealInputs {
//!     deal_amount: dec!(5000),
//!     estimated_hours: dec!(10),
//!     revisions: dec!(0),
//!     expenses: dec!(0),
//!     tax_rate: dec!(30),
//!     software_costs: dec!(0),
//!     agency_fees: dec!(0),
//! };
//!
//! let worksheet = MarginWorksheet::new(false, dec!(100));
//! let result = worksheet.calculate(&inputs);
//!
//! assert_eq!(result.net_revenue, dec!(3500));
//! assert_eq!(result.effective_rate, dec!(350));
//! assert!(result.is_approved);
//! ```

use rust_decimal::Decimal;

use crate::models::{DealInputs, MarginResult};

/// Hours added to the estimate for each revision round.
const HOURS_PER_REVISION: Decimal = Decimal::TWO;

/// Calculator for the deal margin worksheet.
///
/// Holds the two pieces of session configuration the formula depends on:
/// whether advanced costs count, and the acceptance threshold. The
/// calculation itself is infallible and side-effect free, so it is safe to
/// run on every keystroke.
#[derive(Debug, Clone, Copy)]
pub struct MarginWorksheet {
    advanced_costs_enabled: bool,
    minimum_floor: Decimal,
}

impl MarginWorksheet {
    /// Creates a worksheet for the given mode and minimum floor.
    ///
    /// The UI constrains the floor to $25-$500 in $5 steps; the worksheet
    /// itself accepts any value.
    pub fn new(
        advanced_costs_enabled: bool,
        minimum_floor: Decimal,
    ) -> Self {
        Self {
            advanced_costs_enabled,
            minimum_floor,
        }
    }

    /// Runs the complete worksheet over one set of deal inputs.
    pub fn calculate(
        &self,
        inputs: &DealInputs,
    ) -> MarginResult {
        let total_expenses = self.total_expenses(inputs);
        let tax_amount = self.tax_amount(inputs.deal_amount, inputs.tax_rate);
        let net_revenue = self.net_revenue(inputs.deal_amount, total_expenses, tax_amount);
        let total_hours = self.total_hours(inputs.estimated_hours, inputs.revisions);
        let effective_rate = self.effective_rate(net_revenue, total_hours);
        let is_approved = self.is_approved(effective_rate);

        MarginResult {
            total_expenses,
            tax_amount,
            net_revenue,
            total_hours,
            effective_rate,
            is_approved,
        }
    }

    /// Line 1: direct expenses, plus software and agency costs when
    /// advanced-cost mode is on.
    fn total_expenses(
        &self,
        inputs: &DealInputs,
    ) -> Decimal {
        if self.advanced_costs_enabled {
            inputs.expenses + inputs.software_costs + inputs.agency_fees
        } else {
            inputs.expenses
        }
    }

    /// Line 2: amount withheld from the gross at the given tax rate.
    fn tax_amount(
        &self,
        deal_amount: Decimal,
        tax_rate: Decimal,
    ) -> Decimal {
        deal_amount * tax_rate / Decimal::ONE_HUNDRED
    }

    /// Line 3: what is left of the gross. Not clamped; can go negative.
    fn net_revenue(
        &self,
        deal_amount: Decimal,
        total_expenses: Decimal,
        tax_amount: Decimal,
    ) -> Decimal {
        deal_amount - total_expenses - tax_amount
    }

    /// Line 4: estimated hours plus the fixed per-revision surcharge.
    fn total_hours(
        &self,
        estimated_hours: Decimal,
        revisions: Decimal,
    ) -> Decimal {
        estimated_hours + revisions * HOURS_PER_REVISION
    }

    /// Line 5: net revenue per hour. A deal with no hours has rate 0, which
    /// reads as rejected against any positive floor.
    fn effective_rate(
        &self,
        net_revenue: Decimal,
        total_hours: Decimal,
    ) -> Decimal {
        if total_hours > Decimal::ZERO {
            net_revenue / total_hours
        } else {
            Decimal::ZERO
        }
    }

    /// Line 6: verdict. The boundary is inclusive: a rate exactly at the
    /// floor is approved.
    fn is_approved(
        &self,
        effective_rate: Decimal,
    ) -> bool {
        effective_rate >= self.minimum_floor
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn base_inputs() -> DealInputs {
        DealInputs {
            deal_amount: dec!(5000),
            estimated_hours: dec!(10),
            revisions: dec!(0),
            expenses: dec!(0),
            tax_rate: dec!(30),
            software_costs: dec!(0),
            agency_fees: dec!(0),
        }
    }

    // =========================================================================
    // total_expenses tests
    // =========================================================================

    #[test]
    fn total_expenses_excludes_advanced_costs_in_basic_mode() {
        let worksheet = MarginWorksheet::new(false, dec!(100));
        let mut inputs = base_inputs();
        inputs.expenses = dec!(500);
        inputs.software_costs = dec!(200);
        inputs.agency_fees = dec!(300);

        let result = worksheet.total_expenses(&inputs);

        assert_eq!(result, dec!(500));
    }

    #[test]
    fn total_expenses_includes_advanced_costs_in_advanced_mode() {
        let worksheet = MarginWorksheet::new(true, dec!(100));
        let mut inputs = base_inputs();
        inputs.expenses = dec!(500);
        inputs.software_costs = dec!(200);
        inputs.agency_fees = dec!(300);

        let result = worksheet.total_expenses(&inputs);

        assert_eq!(result, dec!(1000));
    }

    // =========================================================================
    // tax_amount tests
    // =========================================================================

    #[test]
    fn tax_amount_applies_rate_as_percentage() {
        let worksheet = MarginWorksheet::new(false, dec!(100));

        let result = worksheet.tax_amount(dec!(5000), dec!(30));

        assert_eq!(result, dec!(1500));
    }

    #[test]
    fn tax_amount_zero_rate_withholds_nothing() {
        let worksheet = MarginWorksheet::new(false, dec!(100));

        let result = worksheet.tax_amount(dec!(5000), dec!(0));

        assert_eq!(result, dec!(0));
    }

    #[test]
    fn tax_amount_rate_above_100_is_not_clamped() {
        let worksheet = MarginWorksheet::new(false, dec!(100));

        let result = worksheet.tax_amount(dec!(1000), dec!(150));

        assert_eq!(result, dec!(1500));
    }

    // =========================================================================
    // net_revenue tests
    // =========================================================================

    #[test]
    fn net_revenue_subtracts_expenses_and_tax() {
        let worksheet = MarginWorksheet::new(false, dec!(100));

        let result = worksheet.net_revenue(dec!(5000), dec!(1000), dec!(1500));

        assert_eq!(result, dec!(2500));
    }

    #[test]
    fn net_revenue_may_go_negative() {
        let worksheet = MarginWorksheet::new(false, dec!(100));

        let result = worksheet.net_revenue(dec!(1000), dec!(800), dec!(500));

        assert_eq!(result, dec!(-300));
    }

    // =========================================================================
    // total_hours tests
    // =========================================================================

    #[test]
    fn total_hours_adds_two_hours_per_revision() {
        let worksheet = MarginWorksheet::new(false, dec!(100));

        let result = worksheet.total_hours(dec!(10), dec!(2));

        assert_eq!(result, dec!(14));
    }

    #[test]
    fn total_hours_without_revisions_is_the_estimate() {
        let worksheet = MarginWorksheet::new(false, dec!(100));

        let result = worksheet.total_hours(dec!(10), dec!(0));

        assert_eq!(result, dec!(10));
    }

    #[test]
    fn total_hours_keeps_fractional_estimates() {
        let worksheet = MarginWorksheet::new(false, dec!(100));

        let result = worksheet.total_hours(dec!(7.5), dec!(1));

        assert_eq!(result, dec!(9.5));
    }

    // =========================================================================
    // effective_rate tests
    // =========================================================================

    #[test]
    fn effective_rate_divides_net_by_hours() {
        let worksheet = MarginWorksheet::new(false, dec!(100));

        let result = worksheet.effective_rate(dec!(3500), dec!(10));

        assert_eq!(result, dec!(350));
    }

    #[test]
    fn effective_rate_zero_hours_is_zero() {
        let worksheet = MarginWorksheet::new(false, dec!(100));

        let result = worksheet.effective_rate(dec!(3500), dec!(0));

        assert_eq!(result, dec!(0));
    }

    #[test]
    fn effective_rate_can_be_negative() {
        let worksheet = MarginWorksheet::new(false, dec!(100));

        let result = worksheet.effective_rate(dec!(-300), dec!(10));

        assert_eq!(result, dec!(-30));
    }

    // =========================================================================
    // is_approved tests
    // =========================================================================

    #[test]
    fn approved_above_floor() {
        let worksheet = MarginWorksheet::new(false, dec!(100));

        assert!(worksheet.is_approved(dec!(350)));
    }

    #[test]
    fn approved_exactly_at_floor() {
        let worksheet = MarginWorksheet::new(false, dec!(100));

        assert!(worksheet.is_approved(dec!(100)));
    }

    #[test]
    fn rejected_below_floor() {
        let worksheet = MarginWorksheet::new(false, dec!(100));

        assert!(!worksheet.is_approved(dec!(99.99)));
    }

    #[test]
    fn zero_rate_approved_when_floor_is_zero() {
        let worksheet = MarginWorksheet::new(false, dec!(0));

        assert!(worksheet.is_approved(dec!(0)));
    }

    // =========================================================================
    // calculate (integration) tests
    // =========================================================================

    #[test]
    fn calculate_simple_deal() {
        // $5,000 over 10 hours at 30% tax, floor $100.
        let worksheet = MarginWorksheet::new(false, dec!(100));
        let inputs = base_inputs();

        let result = worksheet.calculate(&inputs);

        assert_eq!(result.total_expenses, dec!(0));
        assert_eq!(result.tax_amount, dec!(1500));
        assert_eq!(result.net_revenue, dec!(3500));
        assert_eq!(result.total_hours, dec!(10));
        assert_eq!(result.effective_rate, dec!(350));
        assert!(result.is_approved);
    }

    #[test]
    fn calculate_advanced_deal_with_revisions() {
        // Same deal with 2 revisions, $500 expenses and advanced costs on:
        // expenses 1000, tax 1500, net 2500 over 14 hours = 178.57/hr,
        // rejected against a $200 floor.
        let worksheet = MarginWorksheet::new(true, dec!(200));
        let mut inputs = base_inputs();
        inputs.revisions = dec!(2);
        inputs.expenses = dec!(500);
        inputs.software_costs = dec!(200);
        inputs.agency_fees = dec!(300);

        let result = worksheet.calculate(&inputs);

        assert_eq!(result.total_expenses, dec!(1000));
        assert_eq!(result.tax_amount, dec!(1500));
        assert_eq!(result.net_revenue, dec!(2500));
        assert_eq!(result.total_hours, dec!(14));
        assert_eq!(result.effective_rate.round_dp(2), dec!(178.57));
        assert!(!result.is_approved);
    }

    #[test]
    fn calculate_zero_hour_deal_is_rejected() {
        let worksheet = MarginWorksheet::new(false, dec!(100));
        let mut inputs = base_inputs();
        inputs.estimated_hours = dec!(0);
        inputs.revisions = dec!(0);

        let result = worksheet.calculate(&inputs);

        // Net revenue is still positive, but with no hours the rate is
        // defined as 0 and loses to any positive floor.
        assert_eq!(result.net_revenue, dec!(3500));
        assert_eq!(result.total_hours, dec!(0));
        assert_eq!(result.effective_rate, dec!(0));
        assert!(!result.is_approved);
    }

    #[test]
    fn calculate_zero_hour_deal_approved_only_at_zero_floor() {
        let worksheet = MarginWorksheet::new(false, dec!(0));
        let mut inputs = base_inputs();
        inputs.estimated_hours = dec!(0);

        let result = worksheet.calculate(&inputs);

        assert!(result.is_approved);
    }

    #[test]
    fn calculate_rate_exactly_at_floor_is_approved() {
        // 1000 gross, no tax or costs, 10 hours = exactly 100/hr.
        let worksheet = MarginWorksheet::new(false, dec!(100));
        let mut inputs = base_inputs();
        inputs.deal_amount = dec!(1000);
        inputs.tax_rate = dec!(0);

        let result = worksheet.calculate(&inputs);

        assert_eq!(result.effective_rate, dec!(100));
        assert!(result.is_approved);
    }

    #[test]
    fn calculate_underwater_deal_has_negative_rate() {
        let worksheet = MarginWorksheet::new(false, dec!(25));
        let mut inputs = base_inputs();
        inputs.deal_amount = dec!(1000);
        inputs.expenses = dec!(1500);

        let result = worksheet.calculate(&inputs);

        // 1000 - 1500 - 300 = -800 over 10 hours.
        assert_eq!(result.net_revenue, dec!(-800));
        assert_eq!(result.effective_rate, dec!(-80));
        assert!(!result.is_approved);
    }

    #[test]
    fn calculate_is_deterministic() {
        let worksheet = MarginWorksheet::new(true, dec!(150));
        let mut inputs = base_inputs();
        inputs.software_costs = dec!(99.99);

        let first = worksheet.calculate(&inputs);
        let second = worksheet.calculate(&inputs);

        assert_eq!(first, second);
    }

    #[test]
    fn advanced_costs_only_matter_in_advanced_mode() {
        let mut inputs = base_inputs();
        inputs.software_costs = dec!(200);
        inputs.agency_fees = dec!(300);

        let basic = MarginWorksheet::new(false, dec!(100)).calculate(&inputs);
        let advanced = MarginWorksheet::new(true, dec!(100)).calculate(&inputs);

        assert_eq!(basic.net_revenue - advanced.net_revenue, dec!(500));
    }
}
