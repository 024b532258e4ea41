//! Baseline-versus-extra-payment comparison.
//!
//! Runs the same loan twice, once without extra principal and once with
//! the configured monthly extra, and reports months saved, interest
//! avoided, and a month-aligned series for charting both balances.

use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::amortization::{simulate, AmortizationRow, LoanConfig, SimResult};
use crate::fx::ExchangeRate;
use crate::rounding::round_currency;
use crate::types::*;
use crate::MortgageSimResult;

/// Input for a baseline-vs-extra comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonInput {
    /// The loan; its `monthly_extra` drives the extra-payment run.
    pub loan: LoanConfig,
    /// When set, `principal` and `monthly_extra` are quoted in a local
    /// currency at this many local units per unit of account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exchange_rate: Option<f64>,
}

/// One month of both schedules, aligned for charting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRow {
    pub month: u32,
    pub baseline_balance: Money,
    pub extra_balance: Money,
    pub baseline_interest: Money,
    pub extra_interest: Money,
}

/// Interest totals restated in the local quote currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalTotals {
    pub exchange_rate: f64,
    pub baseline_total_interest: Money,
    pub extra_total_interest: Money,
    pub interest_avoided: Money,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonOutput {
    pub baseline: SimResult,
    pub with_extra: SimResult,
    pub months_saved: u32,
    pub interest_avoided: Money,
    pub baseline_payoff_label: String,
    pub extra_payoff_label: String,
    pub months_saved_label: String,
    pub chart: Vec<ChartRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local: Option<LocalTotals>,
}

/// Compare the loan with and without its monthly extra payment.
pub fn compare_extra_payment(
    input: &ComparisonInput,
) -> MortgageSimResult<ComputationOutput<ComparisonOutput>> {
    let start = Instant::now();
    let mut warnings = input.loan.sanitization_notes();

    let fx = input.exchange_rate.map(ExchangeRate::new).transpose()?;
    let loan = match fx {
        Some(fx) => LoanConfig {
            principal: fx.to_account(input.loan.principal),
            monthly_extra: fx.to_account(input.loan.monthly_extra),
            ..input.loan.clone()
        },
        None => input.loan.clone(),
    };

    let baseline = simulate(&loan.with_monthly_extra(0.0));
    let with_extra = simulate(&loan);

    if loan.sanitize().monthly_extra == 0.0 {
        warnings.push("monthly_extra is zero; both schedules are identical".into());
    }
    for (label, run) in [("baseline", &baseline), ("extra-payment", &with_extra)] {
        if !run.fully_amortized {
            warnings.push(format!(
                "The {label} schedule does not reach a zero balance within the safety limit"
            ));
        }
    }

    let months_saved = baseline.payoff_months.saturating_sub(with_extra.payoff_months);
    let interest_avoided =
        round_currency((baseline.total_interest - with_extra.total_interest).max(0.0));

    let local = fx.map(|fx| LocalTotals {
        exchange_rate: fx.rate(),
        baseline_total_interest: fx.from_account(baseline.total_interest),
        extra_total_interest: fx.from_account(with_extra.total_interest),
        interest_avoided: fx.from_account(interest_avoided),
    });

    let output = ComparisonOutput {
        chart: build_chart_rows(&baseline.rows, &with_extra.rows),
        baseline_payoff_label: months_label(baseline.payoff_months),
        extra_payoff_label: months_label(with_extra.payoff_months),
        months_saved_label: months_label(months_saved),
        months_saved,
        interest_avoided,
        local,
        baseline,
        with_extra,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Keep-payment amortization: baseline vs monthly extra principal",
        &serde_json::json!({
            "loan": loan.sanitize(),
            "exchange_rate": input.exchange_rate,
        }),
        warnings,
        elapsed,
        output,
    ))
}

/// Align two schedules month by month. The shorter one repeats its final
/// balance and cumulative interest until the longer one ends.
pub fn build_chart_rows(baseline: &[AmortizationRow], extra: &[AmortizationRow]) -> Vec<ChartRow> {
    let len = baseline.len().max(extra.len());
    let mut rows = Vec::with_capacity(len);

    let mut last_baseline = baseline.first().map(carry).unwrap_or_default();
    let mut last_extra = extra.first().map(carry).unwrap_or_default();

    for idx in 0..len {
        if let Some(row) = baseline.get(idx) {
            last_baseline = carry(row);
        }
        if let Some(row) = extra.get(idx) {
            last_extra = carry(row);
        }

        rows.push(ChartRow {
            month: idx as u32 + 1,
            baseline_balance: last_baseline.0,
            extra_balance: last_extra.0,
            baseline_interest: last_baseline.1,
            extra_interest: last_extra.1,
        });
    }

    rows
}

fn carry(row: &AmortizationRow) -> (Money, Money) {
    (row.balance, row.cumulative_interest)
}

/// Render a month count as `"{years}y {months}m"`.
pub fn months_label(months: u32) -> String {
    format!("{}y {}m", months / 12, months % 12)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(month: u32, balance: Money, cumulative_interest: Money) -> AmortizationRow {
        AmortizationRow {
            month,
            apr: 5.0,
            scheduled_payment: 0.0,
            extra: 0.0,
            interest: 0.0,
            principal: 0.0,
            balance,
            cumulative_interest,
        }
    }

    #[test]
    fn test_months_label() {
        assert_eq!(months_label(0), "0y 0m");
        assert_eq!(months_label(360), "30y 0m");
        assert_eq!(months_label(277), "23y 1m");
    }

    #[test]
    fn test_chart_rows_carry_shorter_schedule_forward() {
        let baseline = vec![row(1, 200.0, 5.0), row(2, 100.0, 9.0), row(3, 0.0, 11.0)];
        let extra = vec![row(1, 150.0, 5.0), row(2, 0.0, 7.0)];

        let chart = build_chart_rows(&baseline, &extra);
        assert_eq!(chart.len(), 3);
        assert_eq!(chart[2].month, 3);
        assert_eq!(chart[2].baseline_balance, 0.0);
        assert_eq!(chart[2].baseline_interest, 11.0);
        assert_eq!(chart[2].extra_balance, 0.0);
        assert_eq!(chart[2].extra_interest, 7.0);
    }

    #[test]
    fn test_chart_rows_empty() {
        assert!(build_chart_rows(&[], &[]).is_empty());
    }

    #[test]
    fn test_chart_rows_one_side_empty() {
        let baseline = vec![row(1, 50.0, 1.0)];
        let chart = build_chart_rows(&baseline, &[]);
        assert_eq!(chart.len(), 1);
        assert_eq!(chart[0].extra_balance, 0.0);
        assert_eq!(chart[0].extra_interest, 0.0);
    }
}
