//! Currency rounding shared by every stored amount and rate.

use crate::types::{Money, Rate};

/// Round to cents, half-up, after nudging by one machine epsilon.
///
/// The nudge stops binary representation error from pulling an exact
/// `.xx5` value below the midpoint (1.005 is stored as 1.00499999...).
/// Every amount the engine stores is non-negative, so half-away-from-zero
/// and half-up agree.
pub fn round_currency(value: f64) -> Money {
    ((value + f64::EPSILON) * 100.0).round() / 100.0
}

/// Convert an annual percentage rate into an unrounded monthly fraction.
pub fn monthly_rate(annual_rate: Rate) -> f64 {
    annual_rate / 100.0 / 12.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_currency_midpoint_goes_up() {
        assert_eq!(round_currency(1.005), 1.01);
        assert_eq!(round_currency(0.125), 0.13);
    }

    #[test]
    fn test_round_currency_keeps_cents() {
        assert_eq!(round_currency(8.25), 8.25);
        assert_eq!(round_currency(1520.0566), 1520.06);
        assert_eq!(round_currency(0.0), 0.0);
    }

    #[test]
    fn test_round_currency_rate_sum() {
        assert_eq!(round_currency(5.75 + 1.4), 7.15);
        assert_eq!(round_currency(6.0 + 2.25), 8.25);
    }

    #[test]
    fn test_monthly_rate() {
        assert!((monthly_rate(6.0) - 0.005).abs() < 1e-15);
        assert_eq!(monthly_rate(0.0), 0.0);
    }
}
