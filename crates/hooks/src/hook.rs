//! The hook capability contract.

use sheetlink_calc::{CalculationRequest, CalculationResponse};

use crate::response::ActionableResponse;

/// Callback the host engine invokes after a calculation completes.
///
/// Implementations read named input fields from the request and may
/// annotate named output fields of the response. The contract:
///
/// - never panic; every fault collapses into a failure envelope
/// - never mutate the request (enforced by the shared reference)
/// - mutate the response only on the success path
pub trait AfterCalculation: Send + Sync {
    /// Stable name, used in registry listings and diagnostics.
    fn name(&self) -> &str;

    /// Called once per completed calculation.
    fn after_calculation(
        &self,
        request: &CalculationRequest,
        response: &mut CalculationResponse,
    ) -> ActionableResponse;
}
