use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::MortgageSimResult;

/// Monetary amounts in the engine's single unit of account, held to cents.
pub type Money = f64;

/// Annual rates in percent units (4.5 = 4.5%). Never as fractions.
pub type Rate = f64;

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "f64_currency_rounded_2dp".to_string(),
        },
    }
}

/// Parse a JSON request body.
pub fn from_json<T: DeserializeOwned>(json: &str) -> MortgageSimResult<T> {
    Ok(serde_json::from_str(json)?)
}

/// Serialize a result for a JSON boundary.
pub fn to_json<T: Serialize>(value: &T) -> MortgageSimResult<String> {
    Ok(serde_json::to_string(value)?)
}
