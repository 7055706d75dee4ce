//! Currency formatting.
//!
//! Monetary values are always shown with exactly two decimal places, rounded
//! half away from zero (`12.345` → `$12.35`), with comma thousands separators.

use rust_decimal::{Decimal, RoundingStrategy};

/// Format a `Decimal` as US dollars: `$1,234.50`, `-$3.10`.
pub fn format_usd(amount: &Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let formatted = format!("{:.2}", rounded.abs());
    let (integer, fraction) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{}${}.{}", sign, group_thousands(integer), fraction)
}

/// Insert comma separators into a run of ASCII digits.
pub fn group_thousands(digits: &str) -> String {
    digits
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|c| std::str::from_utf8(c).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(",")
}
