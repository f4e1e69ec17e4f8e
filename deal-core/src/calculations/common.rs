//! Shared helpers for the calculation modules.
//!
//! The only non-trivial piece is the numeric input boundary: every
//! user-edited field arrives as free-form text and must never surface a
//! parse error, so unparseable input degrades to zero.

use rust_decimal::Decimal;

/// Normalizes free-form numeric input: trims whitespace, removes commas
/// (thousands separator) and strips a leading dollar sign.
fn normalize_numeric_input(s: &str) -> String {
    let cleaned = s.trim().replace(',', "");
    cleaned
        .strip_prefix('$')
        .unwrap_or(&cleaned)
        .trim()
        .to_string()
}

/// Parses a free-form text field into a [`Decimal`], coercing failures to 0.
///
/// Handles comma as thousands separator and an optional leading `$`
/// (e.g. `"$1,234.56"`). Empty or whitespace-only input is 0. Anything that
/// still fails to parse is logged and treated as 0; a parse failure never
/// propagates past this boundary.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use deal_core::calculations::parse_decimal_or_zero;
///
/// assert_eq!(parse_decimal_or_zero("1,234.56"), dec!(1234.56));
/// assert_eq!(parse_decimal_or_zero("$500"), dec!(500));
/// assert_eq!(parse_decimal_or_zero(""), dec!(0));
/// assert_eq!(parse_decimal_or_zero("abc"), dec!(0));
/// ```
pub fn parse_decimal_or_zero(s: &str) -> Decimal {
    let normalized = normalize_numeric_input(s);
    if normalized.is_empty() {
        return Decimal::ZERO;
    }
    normalized.parse().unwrap_or_else(|e| {
        tracing::warn!(input = %s, "unparseable numeric input treated as 0: {}", e);
        Decimal::ZERO
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn parses_plain_numbers() {
        assert_eq!(parse_decimal_or_zero("5000"), dec!(5000));
        assert_eq!(parse_decimal_or_zero("178.57"), dec!(178.57));
    }

    #[test]
    fn accepts_comma_thousands_separator() {
        assert_eq!(parse_decimal_or_zero("1,234.56"), dec!(1234.56));
        assert_eq!(parse_decimal_or_zero("1,234,567.89"), dec!(1234567.89));
    }

    #[test]
    fn strips_leading_dollar_sign() {
        assert_eq!(parse_decimal_or_zero("$500"), dec!(500));
        assert_eq!(parse_decimal_or_zero("$ 1,500"), dec!(1500));
    }

    #[test]
    fn trims_whitespace() {
        assert_eq!(parse_decimal_or_zero("  123.45  "), dec!(123.45));
    }

    #[test]
    fn empty_input_is_zero() {
        assert_eq!(parse_decimal_or_zero(""), Decimal::ZERO);
        assert_eq!(parse_decimal_or_zero("   "), Decimal::ZERO);
    }

    #[test]
    fn unparseable_input_is_zero() {
        assert_eq!(parse_decimal_or_zero("abc"), Decimal::ZERO);
        assert_eq!(parse_decimal_or_zero("12x"), Decimal::ZERO);
        assert_eq!(parse_decimal_or_zero("--5"), Decimal::ZERO);
    }

    #[test]
    fn negative_numbers_still_parse() {
        assert_eq!(parse_decimal_or_zero("-250"), dec!(-250));
    }
}
