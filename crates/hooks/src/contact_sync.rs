//! After-calculation hook that pushes contact details to HubSpot.
//!
//! Reads the `iName` and `iEmail` inputs from the completed calculation,
//! upserts a contact keyed by the e-mail, and writes the HTTP status
//! description into the `Response` output. Any fault — missing field,
//! transport error, non-2xx — collapses into a failure envelope with a
//! single Danger message; nothing escapes to the host.

use sheetlink_calc::{CalculationRequest, CalculationResponse, CellValue};
use sheetlink_hubspot::{ContactProperty, HubSpotClient};

use crate::hook::AfterCalculation;
use crate::response::ActionableResponse;

/// Input field holding the contact name.
pub const INPUT_NAME: &str = "iName";
/// Input field holding the contact e-mail address.
pub const INPUT_EMAIL: &str = "iEmail";
/// Optional input holding a distinct last name; falls back to `iName`.
pub const INPUT_LAST_NAME: &str = "iLastName";
/// Output field that receives the HTTP status description.
pub const OUTPUT_RESPONSE: &str = "Response";

pub struct ContactSyncHook {
    client: HubSpotClient,
}

impl ContactSyncHook {
    pub const NAME: &'static str = "hubspot-contact-sync";

    pub fn new(client: HubSpotClient) -> Self {
        Self { client }
    }
}

/// First cell of a named input, rendered as text. Missing fields and
/// empty grids read as the empty string.
fn input_text(request: &CalculationRequest, name: &str) -> String {
    request
        .input(name)
        .and_then(|field| field.value.first())
        .map(|cell| cell.as_text())
        .unwrap_or_default()
}

impl AfterCalculation for ContactSyncHook {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn after_calculation(
        &self,
        request: &CalculationRequest,
        response: &mut CalculationResponse,
    ) -> ActionableResponse {
        let name = input_text(request, INPUT_NAME);
        let email = input_text(request, INPUT_EMAIL);
        let last_name = match input_text(request, INPUT_LAST_NAME) {
            s if s.is_empty() => name.clone(),
            s => s,
        };

        let properties = [
            ContactProperty::new("firstname", name),
            ContactProperty::new("lastname", last_name),
        ];

        let outcome = match self.client.upsert_contact(&email, &properties) {
            Ok(outcome) => outcome,
            Err(err) => return ActionableResponse::failure(err.to_string()),
        };

        // Only the success path touches the response, and only this cell.
        match response.output_mut(OUTPUT_RESPONSE) {
            Some(field) => field.value.set_first(CellValue::Text(outcome.status_text)),
            None => {
                return ActionableResponse::failure(format!(
                    "output field {:?} not found in calculation response",
                    OUTPUT_RESPONSE
                ));
            }
        }

        ActionableResponse::ok()
    }
}
