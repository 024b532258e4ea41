use clap::Args;

use mortgage_sim_core::amortization::{LoanConfig, PaymentMode};

/// Loan terms supplied as individual flags
#[derive(Args)]
pub struct LoanArgs {
    /// Initial balance
    #[arg(long)]
    pub principal: Option<f64>,

    /// Contractual term in months
    #[arg(long, conflicts_with = "term_years")]
    pub term_months: Option<f64>,

    /// Contractual term in years (converted to months)
    #[arg(long)]
    pub term_years: Option<f64>,

    /// Months at the fixed rate before switching to variable
    #[arg(long, default_value_t = 0.0)]
    pub fixed_months: f64,

    /// Fixed annual rate in percent (e.g. 4.5)
    #[arg(long, default_value_t = 0.0)]
    pub fixed_apr: f64,

    /// Variable base annual rate in percent
    #[arg(long, default_value_t = 0.0)]
    pub variable_base_apr: f64,

    /// Spread added to the variable base rate, in percent
    #[arg(long, default_value_t = 0.0)]
    pub tre: f64,

    /// Extra principal paid every month
    #[arg(long, default_value_t = 0.0)]
    pub monthly_extra: f64,
}

impl LoanArgs {
    pub fn to_config(&self) -> Result<LoanConfig, Box<dyn std::error::Error>> {
        let principal = self
            .principal
            .ok_or("--principal is required (or provide --input)")?;
        let term_months = match (self.term_months, self.term_years) {
            (Some(months), _) => months,
            (None, Some(years)) => years * 12.0,
            (None, None) => {
                return Err("--term-months or --term-years is required (or provide --input)".into())
            }
        };

        Ok(LoanConfig {
            principal,
            term_months,
            fixed_months: self.fixed_months,
            fixed_apr: self.fixed_apr,
            variable_base_apr: self.variable_base_apr,
            tre: self.tre,
            monthly_extra: self.monthly_extra,
            mode: PaymentMode::KeepPayment,
        })
    }
}
