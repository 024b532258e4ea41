use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::config::{LoanConfig, PaymentMode, SanitizedLoan};
use crate::rounding::round_currency;
use crate::time_value::{monthly_interest, payment};
use crate::types::*;

/// One elapsed month of the schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationRow {
    /// 1-based month number.
    pub month: u32,
    /// Annual rate applied this month, percent.
    pub apr: Rate,
    /// Contractual payment actually applied, capped at the payoff amount.
    pub scheduled_payment: Money,
    /// Extra principal actually applied, capped at the remaining balance.
    pub extra: Money,
    pub interest: Money,
    /// Scheduled principal plus extra.
    pub principal: Money,
    /// Balance after this month's payment.
    pub balance: Money,
    pub cumulative_interest: Money,
}

/// Full schedule for one loan configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimResult {
    pub rows: Vec<AmortizationRow>,
    pub payoff_months: u32,
    pub total_interest: Money,
    pub variable_total_apr: Rate,
    /// False when the run stopped on the safety limit with a balance left.
    pub fully_amortized: bool,
}

impl SimResult {
    pub fn last_row(&self) -> Option<&AmortizationRow> {
        self.rows.last()
    }
}

/// Walk the loan month by month until the balance reaches zero or the
/// safety limit (`term_months + 600`) is hit.
///
/// Total over every input: out-of-range numbers are clamped by
/// [`LoanConfig::sanitize`] and the function always returns a schedule.
/// Identical input yields an identical schedule.
pub fn simulate(config: &LoanConfig) -> SimResult {
    let loan = config.sanitize();

    let mut balance = loan.principal;
    let mut cumulative_interest = 0.0;
    let mut scheduled_payment = payment(balance, loan.initial_apr(), loan.term_months);
    let mut rows = Vec::new();

    for month in 1..=loan.safety_limit() {
        if balance <= 0.0 {
            break;
        }

        let apr = loan.apr_for_month(month);
        if loan.transition_month() == Some(month) {
            scheduled_payment = reamortized_payment(&loan, balance);
        }

        let interest = monthly_interest(balance, apr);
        // The contractual last month settles whatever is left so rounding
        // drift can never push payoff past the term.
        let scheduled_cap = if month == loan.term_months {
            round_currency(balance + interest)
        } else {
            round_currency(scheduled_payment.min(balance + interest))
        };
        let scheduled_principal = round_currency((scheduled_cap - interest).max(0.0));

        let max_extra = round_currency((balance - scheduled_principal).max(0.0));
        let extra = loan.monthly_extra.min(max_extra);

        let principal = round_currency(scheduled_principal + extra);
        balance = round_currency((balance - principal).max(0.0));
        cumulative_interest = round_currency(cumulative_interest + interest);

        rows.push(AmortizationRow {
            month,
            apr: round_currency(apr),
            scheduled_payment: scheduled_cap,
            extra,
            interest,
            principal,
            balance,
            cumulative_interest,
        });
    }

    let fully_amortized = balance <= 0.0;
    if fully_amortized {
        log::debug!(
            "schedule paid off after {} months, total interest {:.2}",
            rows.len(),
            cumulative_interest
        );
    } else {
        log::warn!(
            "schedule stopped at safety limit of {} months with balance {:.2}",
            loan.safety_limit(),
            balance
        );
    }

    SimResult {
        payoff_months: rows.len() as u32,
        rows,
        total_interest: cumulative_interest,
        variable_total_apr: loan.variable_total_apr,
        fully_amortized,
    }
}

/// Payment for the variable segment, sized once at the rate switch.
fn reamortized_payment(loan: &SanitizedLoan, balance: Money) -> Money {
    match loan.mode {
        PaymentMode::KeepPayment => {
            payment(balance, loan.variable_total_apr, loan.months_after_fixed())
        }
    }
}

/// Run [`simulate`] and wrap it in the standard output envelope, turning
/// clamped inputs and non-amortizing runs into warnings.
pub fn run_simulation(config: &LoanConfig) -> ComputationOutput<SimResult> {
    let start = Instant::now();
    let loan = config.sanitize();
    let mut warnings = config.sanitization_notes();

    let result = simulate(config);

    if !result.fully_amortized {
        warnings.push(format!(
            "Balance not repaid within {} months; the payment does not cover the interest",
            loan.safety_limit()
        ));
    }
    if result.payoff_months > loan.term_months {
        warnings.push(format!(
            "Payoff month {} is past the contractual term of {} months",
            result.payoff_months, loan.term_months
        ));
    }

    let elapsed = start.elapsed().as_micros() as u64;
    with_metadata(
        "Keep-payment amortization with fixed-to-variable rate switch",
        &loan,
        warnings,
        elapsed,
        result,
    )
}
