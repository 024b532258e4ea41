//! Amortization engine: keep-payment schedules for loans that switch from
//! a fixed rate to a variable (base + spread) rate partway through the term.

pub mod config;
pub mod schedule;

pub use config::{LoanConfig, PaymentMode, SanitizedLoan};
pub use schedule::{run_simulation, simulate, AmortizationRow, SimResult};
