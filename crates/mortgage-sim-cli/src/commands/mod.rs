pub mod amortization;
pub mod loan;
pub mod solver;
