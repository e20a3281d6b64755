//! HubSpot API client — shared between the contact-sync hook and the CLI.
//!
//! This crate is the single source of truth for the HubSpot wire contract:
//! API-key config, the contact create-or-update call, error mapping.
//!
//! Blocking only. No retries, no batching, no token refresh.

mod client;
mod config;

pub use client::{ContactProperty, ContactUpsert, HubSpotClient, HubSpotError};
pub use config::{
    config_file_path, load_config, resolve_api_key, save_config, HubSpotConfig,
    API_KEY_ENV, DEFAULT_API_BASE,
};
