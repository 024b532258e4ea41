//! Smallest constant monthly extra payment that pays a loan off by a
//! target month.
//!
//! Payoff month never increases as the monthly extra grows, so the answer
//! is found by bisection over whole cents between zero (which misses the
//! target) and the full principal (which always pays off in month one).

use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::amortization::{simulate, LoanConfig, SimResult};
use crate::error::MortgageSimError;
use crate::rounding::round_currency;
use crate::types::*;
use crate::MortgageSimResult;

const MAX_BISECTION_ITERATIONS: u32 = 80;

/// Largest principal the cent grid can bracket; above it the cent count no
/// longer fits in a `u64`.
pub const MAX_SOLVABLE_PRINCIPAL: Money = 1e15;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequiredExtraInput {
    /// The loan; its `monthly_extra` is ignored.
    pub loan: LoanConfig,
    /// Latest acceptable payoff month.
    pub target_months: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequiredExtraOutput {
    pub target_months: u32,
    /// False when the loan already pays off by the target without extra.
    pub extra_needed: bool,
    pub required_extra: Money,
    pub resulting_payoff_months: u32,
    pub resulting_total_interest: Money,
    pub baseline_payoff_months: u32,
    pub baseline_total_interest: Money,
    pub interest_saved: Money,
    /// Bisection steps run (zero when no extra is needed).
    pub iterations: u32,
}

fn meets_target(run: &SimResult, target_months: u32) -> bool {
    run.fully_amortized && run.payoff_months <= target_months
}

fn cents_to_money(cents: u64) -> Money {
    cents as f64 / 100.0
}

/// Find the minimum monthly extra, to the cent, that pays the loan off
/// within `target_months`.
pub fn required_extra_payment(
    input: &RequiredExtraInput,
) -> MortgageSimResult<ComputationOutput<RequiredExtraOutput>> {
    let start = Instant::now();

    if input.target_months == 0 {
        return Err(MortgageSimError::InvalidInput {
            field: "target_months".into(),
            reason: "Target payoff must be at least 1 month".into(),
        });
    }

    let target = input.target_months;
    let base_loan = input.loan.with_monthly_extra(0.0);
    let sanitized = base_loan.sanitize();
    let mut warnings = base_loan.sanitization_notes();
    let baseline = simulate(&base_loan);

    if target >= sanitized.term_months {
        warnings.push(format!(
            "Target of {target} months is not shorter than the {}-month term",
            sanitized.term_months
        ));
    }

    let (required_extra, resulting, iterations) = if meets_target(&baseline, target) {
        (0.0, baseline.clone(), 0)
    } else {
        let (cents, run, iterations) = bisect_cents(&base_loan, sanitized.principal, target)?;
        (cents_to_money(cents), run, iterations)
    };

    let output = RequiredExtraOutput {
        target_months: target,
        extra_needed: required_extra > 0.0,
        required_extra,
        resulting_payoff_months: resulting.payoff_months,
        resulting_total_interest: resulting.total_interest,
        baseline_payoff_months: baseline.payoff_months,
        baseline_total_interest: baseline.total_interest,
        interest_saved: round_currency(
            (baseline.total_interest - resulting.total_interest).max(0.0),
        ),
        iterations,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Bisection over whole-cent monthly extra payments",
        &serde_json::json!({
            "loan": sanitized,
            "target_months": target,
        }),
        warnings,
        elapsed,
        output,
    ))
}

/// Returns the least passing amount in cents, its schedule, and the number
/// of bisection steps run.
fn bisect_cents(
    loan: &LoanConfig,
    principal: Money,
    target_months: u32,
) -> MortgageSimResult<(u64, SimResult, u32)> {
    if principal > MAX_SOLVABLE_PRINCIPAL {
        return Err(MortgageSimError::InvalidInput {
            field: "principal".into(),
            reason: format!(
                "Principal {principal} exceeds the solver limit of {MAX_SOLVABLE_PRINCIPAL}"
            ),
        });
    }

    // lo always misses the target, hi always meets it
    let mut lo: u64 = 0;
    let mut hi: u64 = (principal * 100.0).ceil() as u64;
    let mut best = simulate(&loan.with_monthly_extra(cents_to_money(hi)));

    if !meets_target(&best, target_months) {
        return Err(MortgageSimError::FinancialImpossibility(format!(
            "Paying the full principal as extra still misses the {target_months}-month target"
        )));
    }

    let mut iterations = 0;
    while hi - lo > 1 {
        if iterations >= MAX_BISECTION_ITERATIONS {
            return Err(MortgageSimError::ConvergenceFailure {
                function: "required_extra_payment".into(),
                iterations,
                last_delta: cents_to_money(hi - lo),
            });
        }
        iterations += 1;

        let mid = lo + (hi - lo) / 2;
        let run = simulate(&loan.with_monthly_extra(cents_to_money(mid)));
        log::debug!(
            "bisection step {iterations}: extra {:.2} pays off in {} months",
            cents_to_money(mid),
            run.payoff_months
        );

        if meets_target(&run, target_months) {
            hi = mid;
            best = run;
        } else {
            lo = mid;
        }
    }

    Ok((hi, best, iterations))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amortization::PaymentMode;

    fn zero_rate_loan() -> LoanConfig {
        LoanConfig {
            principal: 1200.0,
            term_months: 12.0,
            fixed_months: 12.0,
            fixed_apr: 0.0,
            variable_base_apr: 0.0,
            tre: 0.0,
            monthly_extra: 0.0,
            mode: PaymentMode::KeepPayment,
        }
    }

    #[test]
    fn test_zero_target_rejected() {
        let input = RequiredExtraInput {
            loan: zero_rate_loan(),
            target_months: 0,
        };
        assert!(required_extra_payment(&input).is_err());
    }

    #[test]
    fn test_no_extra_needed_when_term_fits() {
        let input = RequiredExtraInput {
            loan: zero_rate_loan(),
            target_months: 12,
        };
        let out = required_extra_payment(&input).unwrap().result;
        assert!(!out.extra_needed);
        assert_eq!(out.required_extra, 0.0);
        assert_eq!(out.iterations, 0);
        assert_eq!(out.resulting_payoff_months, 12);
    }

    #[test]
    fn test_zero_rate_six_months() {
        // 1200 over 6 months at 0%: 200 a month, 100 of it extra
        let input = RequiredExtraInput {
            loan: zero_rate_loan(),
            target_months: 6,
        };
        let out = required_extra_payment(&input).unwrap().result;
        assert!(out.extra_needed);
        assert_eq!(out.required_extra, 100.0);
        assert_eq!(out.resulting_payoff_months, 6);
        assert_eq!(out.interest_saved, 0.0);
    }

    #[test]
    fn test_one_month_target_needs_balance_less_first_payment() {
        let input = RequiredExtraInput {
            loan: zero_rate_loan(),
            target_months: 1,
        };
        let out = required_extra_payment(&input).unwrap().result;
        assert_eq!(out.required_extra, 1100.0);
        assert_eq!(out.resulting_payoff_months, 1);
    }

    #[test]
    fn test_negative_extra_on_input_does_not_warn() {
        let mut loan = zero_rate_loan();
        loan.monthly_extra = -50.0;
        let output = required_extra_payment(&RequiredExtraInput {
            loan,
            target_months: 6,
        })
        .unwrap();
        assert!(output.warnings.is_empty());
        assert_eq!(output.result.required_extra, 100.0);
    }

    #[test]
    fn test_principal_beyond_cent_grid_rejected() {
        let mut loan = zero_rate_loan();
        loan.principal = 1e18;
        let err = required_extra_payment(&RequiredExtraInput {
            loan,
            target_months: 6,
        })
        .unwrap_err();
        assert!(matches!(err, MortgageSimError::InvalidInput { ref field, .. } if field == "principal"));
    }
}
