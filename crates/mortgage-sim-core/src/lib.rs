pub mod amortization;
pub mod error;
pub mod fx;
pub mod rounding;
pub mod time_value;
pub mod types;

#[cfg(feature = "comparison")]
pub mod comparison;

#[cfg(feature = "solver")]
pub mod solver;

pub use amortization::{run_simulation, simulate, AmortizationRow, LoanConfig, PaymentMode, SimResult};
pub use error::MortgageSimError;
pub use types::*;

/// Standard result type for all mortgage-sim operations
pub type MortgageSimResult<T> = Result<T, MortgageSimError>;
