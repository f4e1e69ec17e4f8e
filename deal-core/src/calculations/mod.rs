//! Calculation logic for the deal margin worksheet.

pub mod common;
pub mod margin;

pub use common::parse_decimal_or_zero;
pub use margin::MarginWorksheet;
