use clap::Args;
use serde_json::Value;

use mortgage_sim_core::amortization::{self, LoanConfig};
use mortgage_sim_core::comparison::{self, ComparisonInput};

use super::loan::LoanArgs;
use crate::input;

/// Arguments for a single amortization schedule
#[derive(Args)]
pub struct SimulateArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    #[command(flatten)]
    pub loan: LoanArgs,
}

pub fn run_simulate(args: SimulateArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let config: LoanConfig = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        args.loan.to_config()?
    };

    let result = amortization::run_simulation(&config);
    Ok(serde_json::to_value(result)?)
}

/// Arguments for the baseline vs extra-payment comparison
#[derive(Args)]
pub struct CompareArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    #[command(flatten)]
    pub loan: LoanArgs,

    /// Local currency units per unit of account; principal and extra are
    /// then read as local amounts
    #[arg(long)]
    pub exchange_rate: Option<f64>,
}

pub fn run_compare(args: CompareArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let cmp_input: ComparisonInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        ComparisonInput {
            loan: args.loan.to_config()?,
            exchange_rate: args.exchange_rate,
        }
    };

    let result = comparison::compare_extra_payment(&cmp_input)?;
    Ok(serde_json::to_value(result)?)
}
