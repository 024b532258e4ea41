//! Conversion between a local quote currency and the engine's unit of
//! account. The engine itself never converts; callers convert inputs
//! before [`crate::simulate`] and outputs after it.

use serde::{Deserialize, Serialize};

use crate::amortization::config::safe_non_negative;
use crate::error::MortgageSimError;
use crate::rounding::round_currency;
use crate::types::Money;
use crate::MortgageSimResult;

/// Floor applied to every exchange rate.
pub const MIN_EXCHANGE_RATE: f64 = 0.0001;

/// Local currency units per one unit of account.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRate(f64);

impl ExchangeRate {
    /// The identity rate: local amounts are already in the unit of account.
    pub const PAR: ExchangeRate = ExchangeRate(1.0);

    /// Rejects non-finite and non-positive rates; positive rates below
    /// [`MIN_EXCHANGE_RATE`] are raised to it.
    pub fn new(rate: f64) -> MortgageSimResult<Self> {
        if !rate.is_finite() || rate <= 0.0 {
            return Err(MortgageSimError::InvalidInput {
                field: "exchange_rate".into(),
                reason: format!("Exchange rate must be a positive number, got {rate}"),
            });
        }
        Ok(Self(rate.max(MIN_EXCHANGE_RATE)))
    }

    /// Accept anything a form field might hold, flooring at
    /// [`MIN_EXCHANGE_RATE`].
    pub fn resolve(raw: f64) -> Self {
        Self(safe_non_negative(raw).max(MIN_EXCHANGE_RATE))
    }

    pub fn rate(&self) -> f64 {
        self.0
    }

    /// Local amount to unit of account. Left unrounded so that converting
    /// back reproduces the original local amount to the cent.
    pub fn to_account(&self, local: Money) -> Money {
        local / self.0
    }

    /// Unit-of-account amount to local currency, rounded to cents.
    pub fn from_account(&self, amount: Money) -> Money {
        round_currency(amount * self.0)
    }
}

impl Default for ExchangeRate {
    fn default() -> Self {
        Self::PAR
    }
}
