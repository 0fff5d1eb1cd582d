//! Number formatting for display.
//!
//! Rounding works on the shortest decimal representation of the value, so
//! `1.005` rounds to `"1.01"` the way it reads, not the way its binary
//! approximation (`1.00499999...`) would.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

/// Placeholder for an absent or non-finite value.
pub const NOT_AVAILABLE: &str = "N/A";

/// Two-decimal rendering of a price, or `N/A`.
pub fn price(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => fixed2(v),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Two-decimal rendering of a percentage (no `%` sign), or `N/A`.
pub fn percent(value: Option<f64>) -> String {
    price(value)
}

/// Round half away from zero to two decimals.
///
/// Values too large for a `Decimal` fall back to plain float formatting.
pub fn fixed2(value: f64) -> String {
    let Ok(decimal) = Decimal::from_str(&value.to_string()) else {
        return format!("{:.2}", value);
    };
    let mut rounded = decimal.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        // -0.001 rounds to zero; print it unsigned.
        rounded = rounded.abs();
    }
    rounded.rescale(2);
    rounded.to_string()
}

/// Compact rendering of a count or delta: integers without decimals,
/// fractions as-is.
pub fn number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// Integer fields that may be missing.
pub fn count(value: Option<i64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| NOT_AVAILABLE.to_string())
}
