use clap::Args;
use serde_json::Value;

use mortgage_sim_core::solver::{self, RequiredExtraInput};

use super::loan::LoanArgs;
use crate::input;

/// Arguments for the required extra-payment solver
#[derive(Args)]
pub struct RequiredExtraArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    #[command(flatten)]
    pub loan: LoanArgs,

    /// Latest acceptable payoff month
    #[arg(long, conflicts_with = "target_years")]
    pub target_months: Option<u32>,

    /// Latest acceptable payoff, in years
    #[arg(long)]
    pub target_years: Option<u32>,
}

pub fn run_required_extra(args: RequiredExtraArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let req_input: RequiredExtraInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        let target_months = match (args.target_months, args.target_years) {
            (Some(months), _) => months,
            (None, Some(years)) => years.saturating_mul(12),
            (None, None) => {
                return Err("--target-months or --target-years is required (or provide --input)".into())
            }
        };
        RequiredExtraInput {
            loan: args.loan.to_config()?,
            target_months,
        }
    };

    let result = solver::required_extra_payment(&req_input)?;
    Ok(serde_json::to_value(result)?)
}
