use napi::Result as NapiResult;
use napi_derive::napi;

use mortgage_sim_core::amortization::LoanConfig;
use mortgage_sim_core::comparison::ComparisonInput;
use mortgage_sim_core::solver::RequiredExtraInput;
use mortgage_sim_core::{from_json, to_json};

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Amortization
// ---------------------------------------------------------------------------

#[napi]
pub fn simulate(input_json: String) -> NapiResult<String> {
    let input: LoanConfig = from_json(&input_json).map_err(to_napi_error)?;
    let output = mortgage_sim_core::amortization::run_simulation(&input);
    to_json(&output).map_err(to_napi_error)
}

#[napi]
pub fn compare_extra_payment(input_json: String) -> NapiResult<String> {
    let input: ComparisonInput = from_json(&input_json).map_err(to_napi_error)?;
    let output =
        mortgage_sim_core::comparison::compare_extra_payment(&input).map_err(to_napi_error)?;
    to_json(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Solver
// ---------------------------------------------------------------------------

#[napi]
pub fn required_extra_payment(input_json: String) -> NapiResult<String> {
    let input: RequiredExtraInput = from_json(&input_json).map_err(to_napi_error)?;
    let output =
        mortgage_sim_core::solver::required_extra_payment(&input).map_err(to_napi_error)?;
    to_json(&output).map_err(to_napi_error)
}
