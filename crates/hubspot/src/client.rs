//! HubSpot HTTP client.
//!
//! Blocking reqwest client (no Tokio runtime required).
//! Covers the one call the contact-sync hook needs: create-or-update a
//! contact keyed by e-mail address.

use std::time::Duration;

use serde::Serialize;

use crate::config::HubSpotConfig;

/// HubSpot API client (blocking).
#[derive(Clone)]
pub struct HubSpotClient {
    http: reqwest::blocking::Client,
    api_base: String,
    api_key: String,
}

/// Error type for HubSpot operations.
#[derive(Debug)]
pub enum HubSpotError {
    /// No API key configured
    MissingApiKey,
    /// Network error
    Network(String),
    /// HTTP error with status code
    Http(u16, String),
    /// URL or JSON parsing error
    Parse(String),
    /// File I/O error
    Io(String),
}

impl std::fmt::Display for HubSpotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HubSpotError::MissingApiKey => write!(
                f,
                "missing HubSpot API key (use --api-key, set HUBSPOT_API_KEY, or save a config file)"
            ),
            HubSpotError::Network(msg) => write!(f, "Network error: {}", msg),
            HubSpotError::Http(code, msg) => write!(f, "HTTP {}: {}", code, msg),
            HubSpotError::Parse(msg) => write!(f, "Parse error: {}", msg),
            HubSpotError::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for HubSpotError {}

/// One `{ "property": ..., "value": ... }` pair in the upsert body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactProperty {
    pub property: String,
    pub value: String,
}

impl ContactProperty {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }
}

#[derive(Serialize)]
struct ContactUpsertBody<'a> {
    properties: &'a [ContactProperty],
}

/// Outcome of a successful upsert.
#[derive(Debug, Clone)]
pub struct ContactUpsert {
    pub status: u16,
    /// Status line text ("OK"), surfaced back into the calculation response.
    pub status_text: String,
    /// Contact record id, when the endpoint returns one.
    pub vid: Option<i64>,
    /// True when the contact was created rather than updated.
    pub is_new: Option<bool>,
}

impl HubSpotClient {
    pub fn new(config: &HubSpotConfig) -> Self {
        let http = reqwest::blocking::Client::builder()
            .user_agent(format!("sheetlink/{}", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("failed to build HTTP client");

        Self {
            http,
            api_base: config.api_base.clone(),
            api_key: config.api_key.clone(),
        }
    }

    /// Create or update a contact keyed by e-mail address.
    ///
    /// `POST /contacts/v1/contact/createOrUpdate/email/{email}?hapikey=…`
    /// with the given property pairs as the JSON body. One outbound call,
    /// no retries. The e-mail lands in the URL path percent-encoded; an
    /// empty e-mail produces an empty trailing segment (the server rejects
    /// it, which surfaces as an `Http` error).
    pub fn upsert_contact(
        &self,
        email: &str,
        properties: &[ContactProperty],
    ) -> Result<ContactUpsert, HubSpotError> {
        let mut url = url::Url::parse(&self.api_base)
            .map_err(|e| HubSpotError::Parse(format!("invalid API base URL: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| HubSpotError::Parse("API base URL cannot be a base".into()))?
            .pop_if_empty()
            .extend(["contacts", "v1", "contact", "createOrUpdate", "email", email]);
        url.query_pairs_mut().append_pair("hapikey", &self.api_key);

        let response = self
            .http
            .post(url)
            .json(&ContactUpsertBody { properties })
            .send()
            .map_err(|e| HubSpotError::Network(e.to_string()))?;

        let status = response.status();
        let status_text = status
            .canonical_reason()
            .map(|r| r.to_string())
            .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));

        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(HubSpotError::Http(
                status.as_u16(),
                extract_error_message(&body, status.as_u16()),
            ));
        }

        // Body may be empty (204) or non-JSON; tolerate both.
        let text = response
            .text()
            .map_err(|e| HubSpotError::Parse(e.to_string()))?;
        let json: serde_json::Value =
            serde_json::from_str(&text).unwrap_or(serde_json::Value::Null);

        Ok(ContactUpsert {
            status: status.as_u16(),
            status_text,
            vid: json["vid"].as_i64(),
            is_new: json["isNew"].as_bool(),
        })
    }
}

/// Pull the human-readable message out of a HubSpot error body.
fn extract_error_message(body: &str, status: u16) -> String {
    let json: serde_json::Value = serde_json::from_str(body).unwrap_or(serde_json::Value::Null);
    json["message"]
        .as_str()
        .or_else(|| json["error"].as_str())
        .map(|s| s.to_string())
        .unwrap_or_else(|| format!("HTTP {}", status))
}
