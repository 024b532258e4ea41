use serde::{Deserialize, Serialize};

use crate::rounding::round_currency;
use crate::types::{Money, Rate};

/// Slack added to the contractual term before a run is cut off.
pub const SAFETY_SLACK_MONTHS: u32 = 600;

/// How extra principal interacts with the contractual payment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMode {
    /// The scheduled payment stays fixed; extra principal shortens the loan.
    #[default]
    KeepPayment,
}

/// Loan configuration as received from a caller. Nothing here is trusted:
/// `sanitize` turns it into a [`SanitizedLoan`] before any arithmetic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanConfig {
    /// Initial balance in the unit of account.
    pub principal: Money,
    /// Contractual term in months. Rounded to the nearest whole month.
    pub term_months: f64,
    /// Months at `fixed_apr` before switching to the variable rate.
    pub fixed_months: f64,
    /// Annual rate during the fixed segment, percent.
    pub fixed_apr: Rate,
    /// Annual base rate after the fixed segment, percent.
    pub variable_base_apr: Rate,
    /// Spread added to `variable_base_apr`, percent.
    pub tre: Rate,
    /// Extra principal paid every month on top of the scheduled payment.
    #[serde(default)]
    pub monthly_extra: Money,
    #[serde(default)]
    pub mode: PaymentMode,
}

/// Clamped, integral view of a [`LoanConfig`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SanitizedLoan {
    pub principal: Money,
    pub term_months: u32,
    pub fixed_months: u32,
    pub fixed_apr: Rate,
    pub variable_base_apr: Rate,
    pub tre: Rate,
    pub variable_total_apr: Rate,
    pub monthly_extra: Money,
    pub mode: PaymentMode,
}

/// Non-finite or negative values become zero.
pub fn safe_non_negative(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    value.max(0.0)
}

/// Non-finite or negative values become zero; others round to the nearest
/// integer. Values beyond `u32::MAX` saturate.
pub fn safe_non_negative_int(value: f64) -> u32 {
    if !value.is_finite() {
        return 0;
    }
    value.round().max(0.0) as u32
}

impl LoanConfig {
    pub fn sanitize(&self) -> SanitizedLoan {
        let term_months = safe_non_negative_int(self.term_months).max(1);
        let fixed_months = safe_non_negative_int(self.fixed_months).min(term_months);
        let variable_base_apr = safe_non_negative(self.variable_base_apr);
        let tre = safe_non_negative(self.tre);

        SanitizedLoan {
            principal: round_currency(safe_non_negative(self.principal)),
            term_months,
            fixed_months,
            fixed_apr: safe_non_negative(self.fixed_apr),
            variable_base_apr,
            tre,
            variable_total_apr: round_currency(variable_base_apr + tre),
            monthly_extra: safe_non_negative(self.monthly_extra),
            mode: self.mode,
        }
    }

    /// Same loan with a different monthly extra payment.
    pub fn with_monthly_extra(&self, monthly_extra: Money) -> Self {
        Self {
            monthly_extra,
            ..self.clone()
        }
    }

    /// One note per field that sanitization had to change.
    pub fn sanitization_notes(&self) -> Vec<String> {
        let loan = self.sanitize();
        let mut notes = Vec::new();

        let amounts = [
            ("principal", self.principal, safe_non_negative(self.principal)),
            ("fixed_apr", self.fixed_apr, loan.fixed_apr),
            ("variable_base_apr", self.variable_base_apr, loan.variable_base_apr),
            ("tre", self.tre, loan.tre),
            ("monthly_extra", self.monthly_extra, loan.monthly_extra),
        ];
        for (field, raw, clamped) in amounts {
            if raw != clamped {
                notes.push(format!("{field} {raw} is not a finite non-negative number; using {clamped}"));
            }
        }

        if self.term_months != f64::from(loan.term_months) {
            notes.push(format!(
                "term_months {} adjusted to {} (whole months, at least 1)",
                self.term_months, loan.term_months
            ));
        }
        if self.fixed_months != f64::from(loan.fixed_months) {
            notes.push(format!(
                "fixed_months {} adjusted to {} (whole months, at most term_months)",
                self.fixed_months, loan.fixed_months
            ));
        }

        notes
    }
}

impl SanitizedLoan {
    /// The fixed segment covers the whole term; the variable rate never applies.
    pub fn is_pure_fixed(&self) -> bool {
        self.fixed_months >= self.term_months
    }

    /// Annual rate in effect for a 1-based month.
    pub fn apr_for_month(&self, month: u32) -> Rate {
        if self.is_pure_fixed() || month <= self.fixed_months {
            self.fixed_apr
        } else {
            self.variable_total_apr
        }
    }

    /// Rate used to size the payment before the first month.
    pub fn initial_apr(&self) -> Rate {
        if self.fixed_months > 0 {
            self.fixed_apr
        } else {
            self.variable_total_apr
        }
    }

    /// First month of the variable segment on a mixed loan. Pure-fixed and
    /// variable-from-start loans have no transition.
    pub fn transition_month(&self) -> Option<u32> {
        if self.fixed_months > 0 && self.fixed_months < self.term_months {
            Some(self.fixed_months + 1)
        } else {
            None
        }
    }

    /// Contractual months left once the fixed segment ends.
    pub fn months_after_fixed(&self) -> u32 {
        self.term_months.saturating_sub(self.fixed_months).max(1)
    }

    /// Last month the engine will emit before giving up.
    pub fn safety_limit(&self) -> u32 {
        self.term_months.saturating_add(SAFETY_SLACK_MONTHS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mixed_config() -> LoanConfig {
        LoanConfig {
            principal: 300_000.0,
            term_months: 360.0,
            fixed_months: 60.0,
            fixed_apr: 4.5,
            variable_base_apr: 6.0,
            tre: 2.25,
            monthly_extra: 0.0,
            mode: PaymentMode::KeepPayment,
        }
    }

    #[test]
    fn test_sanitize_clean_config_unchanged() {
        let loan = mixed_config().sanitize();
        assert_eq!(loan.principal, 300_000.0);
        assert_eq!(loan.term_months, 360);
        assert_eq!(loan.fixed_months, 60);
        assert_eq!(loan.variable_total_apr, 8.25);
        assert!(mixed_config().sanitization_notes().is_empty());
    }

    #[test]
    fn test_sanitize_non_finite_and_negative() {
        let config = LoanConfig {
            principal: f64::NAN,
            term_months: f64::INFINITY,
            fixed_months: -3.0,
            fixed_apr: -1.0,
            variable_base_apr: f64::NEG_INFINITY,
            tre: 1.5,
            monthly_extra: -100.0,
            mode: PaymentMode::KeepPayment,
        };
        let loan = config.sanitize();
        assert_eq!(loan.principal, 0.0);
        assert_eq!(loan.term_months, 1);
        assert_eq!(loan.fixed_months, 0);
        assert_eq!(loan.fixed_apr, 0.0);
        assert_eq!(loan.variable_base_apr, 0.0);
        assert_eq!(loan.variable_total_apr, 1.5);
        assert_eq!(loan.monthly_extra, 0.0);
        assert_eq!(config.sanitization_notes().len(), 6);
    }

    #[test]
    fn test_sanitize_rounds_months_and_caps_fixed() {
        let mut config = mixed_config();
        config.term_months = 11.6;
        config.fixed_months = 40.0;
        let loan = config.sanitize();
        assert_eq!(loan.term_months, 12);
        assert_eq!(loan.fixed_months, 12);
        assert!(loan.is_pure_fixed());
        assert_eq!(loan.transition_month(), None);
    }

    #[test]
    fn test_sanitize_rounds_principal_to_cents() {
        let mut config = mixed_config();
        config.principal = 1_200_000.0 / 9.09;
        assert_eq!(config.sanitize().principal, 132_013.2);
    }

    #[test]
    fn test_apr_for_month_segments() {
        let loan = mixed_config().sanitize();
        assert_eq!(loan.apr_for_month(1), 4.5);
        assert_eq!(loan.apr_for_month(60), 4.5);
        assert_eq!(loan.apr_for_month(61), 8.25);
        assert_eq!(loan.transition_month(), Some(61));
        assert_eq!(loan.months_after_fixed(), 300);
    }

    #[test]
    fn test_initial_apr_variable_from_start() {
        let mut config = mixed_config();
        config.fixed_months = 0.0;
        let loan = config.sanitize();
        assert_eq!(loan.initial_apr(), 8.25);
        assert_eq!(loan.apr_for_month(1), 8.25);
        assert_eq!(loan.transition_month(), None);
    }

    #[test]
    fn test_safety_limit_saturates() {
        let mut config = mixed_config();
        config.term_months = 1e12;
        assert_eq!(config.sanitize().safety_limit(), u32::MAX);
        assert_eq!(mixed_config().sanitize().safety_limit(), 960);
    }

    #[test]
    fn test_mode_serializes_as_tag() {
        let json = serde_json::to_value(PaymentMode::KeepPayment).unwrap();
        assert_eq!(json, serde_json::json!("KEEP_PAYMENT"));
    }

    #[test]
    fn test_deserialize_defaults_extra_and_mode() {
        let config: LoanConfig = serde_json::from_str(
            r#"{"principal":1000,"term_months":12,"fixed_months":0,"fixed_apr":0,"variable_base_apr":5,"tre":1}"#,
        )
        .unwrap();
        assert_eq!(config.monthly_extra, 0.0);
        assert_eq!(config.mode, PaymentMode::KeepPayment);
    }
}
