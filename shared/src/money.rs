//! Money formatting using rust_decimal for precision
//!
//! Totals are computed as `Decimal` internally, then rounded to whole
//! pesos for display. Colombian-peso convention: no decimal places,
//! "." as thousands separator, "$" prefix.

use rust_decimal::prelude::*;

/// Rounding strategy for peso amounts (whole pesos, half-up)
const DECIMAL_PLACES: u32 = 0;

/// Convert f64 to Decimal for calculation
///
/// Non-finite values (NaN, Infinity) are logged and treated as zero so
/// a single bad price cannot poison a running total.
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_else(|| {
        tracing::error!(value = ?value, "Non-finite f64 in monetary calculation, defaulting to zero");
        Decimal::ZERO
    })
}

/// Round a peso amount to a whole number of pesos
pub fn round_pesos(value: Decimal) -> i64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or(0)
}

/// Format a peso amount in Colombian style: `"$1.234.567"`
///
/// The amount is rounded to the nearest whole peso first.
pub fn format_cop(value: Decimal) -> String {
    let pesos = round_pesos(value);
    format!("${}", group_thousands(pesos))
}

/// Insert "." thousands separators into a whole-peso amount
fn group_thousands(pesos: i64) -> String {
    let digits = pesos.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if pesos < 0 {
        grouped.push('-');
    }
    let first = digits.len() % 3;
    if first > 0 {
        grouped.push_str(&digits[..first]);
    }
    for (i, chunk) in digits[first..].as_bytes().chunks(3).enumerate() {
        if first > 0 || i > 0 {
            grouped.push('.');
        }
        // chunks of a valid digit string are themselves valid UTF-8
        grouped.push_str(std::str::from_utf8(chunk).unwrap_or(""));
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_zero() {
        assert_eq!(format_cop(Decimal::ZERO), "$0");
    }

    #[test]
    fn test_format_grouping() {
        assert_eq!(format_cop(Decimal::from(950)), "$950");
        assert_eq!(format_cop(Decimal::from(1_000)), "$1.000");
        assert_eq!(format_cop(Decimal::from(12_500)), "$12.500");
        assert_eq!(format_cop(Decimal::from(1_234_567)), "$1.234.567");
    }

    #[test]
    fn test_rounding_to_whole_pesos() {
        // Midpoint rounds away from zero
        let half = Decimal::new(9995, 1); // 999.5
        assert_eq!(round_pesos(half), 1000);
        let below = Decimal::new(9994, 1); // 999.4
        assert_eq!(round_pesos(below), 999);
    }

    #[test]
    fn test_non_finite_defaults_to_zero() {
        assert_eq!(to_decimal(f64::NAN), Decimal::ZERO);
        assert_eq!(to_decimal(f64::INFINITY), Decimal::ZERO);
    }

    #[test]
    fn test_negative_grouping() {
        assert_eq!(format_cop(Decimal::from(-1_234)), "$-1.234");
    }
}
