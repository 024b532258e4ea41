mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::amortization::{CompareArgs, SimulateArgs};
use commands::solver::RequiredExtraArgs;

/// Mortgage amortization and extra-payment simulations
#[derive(Parser)]
#[command(
    name = "msim",
    version,
    about = "Mortgage amortization and extra-payment simulations",
    long_about = "Builds month-by-month amortization schedules for loans that switch \
                  from a fixed rate to a variable (base + spread) rate, compares them \
                  against extra principal payments, and solves for the monthly extra \
                  needed to hit a payoff target."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the full amortization schedule for one loan
    Simulate(SimulateArgs),
    /// Compare the loan with and without its monthly extra payment
    Compare(CompareArgs),
    /// Find the smallest monthly extra that pays off by a target month
    RequiredExtra(RequiredExtraArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Simulate(args) => commands::amortization::run_simulate(args),
        Commands::Compare(args) => commands::amortization::run_compare(args),
        Commands::RequiredExtra(args) => commands::solver::run_required_extra(args),
        Commands::Version => {
            println!("msim {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
