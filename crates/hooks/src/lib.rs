//! Calculation lifecycle hooks.
//!
//! The host engine owns the calculation; hooks are callbacks it invokes
//! at defined lifecycle points. This crate defines the after-calculation
//! contract ([`AfterCalculation`]), the result envelope the host consumes
//! ([`ActionableResponse`]), a registry for dispatch, and the one shipped
//! hook: HubSpot contact sync.

mod contact_sync;
mod hook;
mod registry;
mod response;

pub use contact_sync::{
    ContactSyncHook, INPUT_EMAIL, INPUT_LAST_NAME, INPUT_NAME, OUTPUT_RESPONSE,
};
pub use hook::AfterCalculation;
pub use registry::HookRegistry;
pub use response::{ActionableResponse, MessageLevel, ResponseMessage};
