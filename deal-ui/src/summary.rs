//! Display formatting and the copyable deal summary.
//!
//! Amounts render as whole dollars with thousands separators; the effective
//! rate keeps two decimals. The summary layout is fixed so the text can be
//! pasted into a message or contract note as-is.

use rust_decimal::{Decimal, RoundingStrategy};

use deal_core::models::{DealInputs, MarginResult};

/// Verdict line for an approved deal.
pub const VERDICT_APPROVED: &str = "GREEN LIGHT: take the deal";

/// Verdict line for a rejected deal.
pub const VERDICT_REJECTED: &str = "RED FLAG: renegotiate or walk away";

/// Groups a bare digit string into thousands: `"1234567"` -> `"1,234,567"`.
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let len = digits.len();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Formats a currency amount as whole dollars, e.g. `$3,500` or `-$1,200`.
/// Rounds half away from zero, the convention for currency display.
pub fn format_currency(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}${}", group_thousands(&rounded.abs().to_string()))
}

/// Formats a currency amount with cents, e.g. `$178.57`.
pub fn format_currency_cents(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let text = format!("{:.2}", rounded.abs());
    match text.split_once('.') {
        Some((whole, cents)) => format!("{sign}${}.{cents}", group_thousands(whole)),
        None => format!("{sign}${}", group_thousands(&text)),
    }
}

/// Formats an hour count, trimming insignificant zeros: `10h`, `9.5h`.
pub fn format_hours(value: Decimal) -> String {
    format!("{}h", value.normalize())
}

/// The verdict line, derived solely from the approval flag.
pub fn verdict(is_approved: bool) -> &'static str {
    if is_approved {
        VERDICT_APPROVED
    } else {
        VERDICT_REJECTED
    }
}

/// Renders the fixed-layout copyable summary of a calculated deal.
pub fn deal_summary(
    inputs: &DealInputs,
    minimum_floor: Decimal,
    result: &MarginResult,
) -> String {
    format!(
        "DEAL MARGIN SUMMARY\n\
         Deal amount:    {}\n\
         Net revenue:    {}\n\
         Total hours:    {}\n\
         Effective rate: {}/hr\n\
         Minimum floor:  {}/hr\n\
         Verdict:        {}",
        format_currency(inputs.deal_amount),
        format_currency(result.net_revenue),
        format_hours(result.total_hours),
        format_currency_cents(result.effective_rate),
        format_currency(minimum_floor),
        verdict(result.is_approved),
    )
}
