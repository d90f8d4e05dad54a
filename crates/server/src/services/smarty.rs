//! `SmartyStreets` US street-address verification client.
//!
//! Every failure mode degrades into a [`ValidationStatus`] rather than an
//! error: callers always get a status to persist, and a request that hits
//! this client never fails because the third-party service did. No retries;
//! a failed call is terminal for that invocation.

use std::time::Duration;

use reqwest::StatusCode;
use secrecy::ExposeSecret;

use rolodex_core::ValidationStatus;

use crate::config::SmartyConfig;

/// `SmartyStreets` US street-address API endpoint.
const STREET_API_URL: &str = "https://us-street.api.smartystreets.com/street-address";

/// Bound on each verification call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// `SmartyStreets` API client.
#[derive(Clone)]
pub struct SmartyClient {
    client: reqwest::Client,
    credentials: Option<Credentials>,
}

#[derive(Clone)]
struct Credentials {
    auth_id: String,
    auth_token: secrecy::SecretString,
}

impl SmartyClient {
    /// Create a new client from configuration.
    ///
    /// A client without credentials is still valid; every `verify` call on it
    /// short-circuits to [`ValidationStatus::NotValidated`].
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(config: &SmartyConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        let credentials = match (&config.auth_id, &config.auth_token) {
            (Some(auth_id), Some(auth_token)) => Some(Credentials {
                auth_id: auth_id.clone(),
                auth_token: auth_token.clone(),
            }),
            _ => None,
        };

        Ok(Self {
            client,
            credentials,
        })
    }

    /// Verify a postal address against the `SmartyStreets` API.
    ///
    /// Without credentials this returns [`ValidationStatus::NotValidated`]
    /// immediately and performs no network activity.
    pub async fn verify(
        &self,
        street: &str,
        city: &str,
        state: &str,
        zipcode: &str,
    ) -> ValidationStatus {
        let Some(credentials) = &self.credentials else {
            tracing::warn!("SmartyStreets credentials not provided, skipping validation");
            return ValidationStatus::NotValidated;
        };

        let params = [
            ("auth-id", credentials.auth_id.as_str()),
            ("auth-token", credentials.auth_token.expose_secret()),
            ("street", street),
            ("city", city),
            ("state", state),
            ("zipcode", zipcode),
        ];

        let response = match self
            .client
            .get(STREET_API_URL)
            .query(&params)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(error = %e, "address validation failed");
                return ValidationStatus::Failed;
            }
        };

        let status = response.status();
        match response.text().await {
            Ok(body) => interpret_response(status, &body),
            Err(e) => {
                tracing::error!(error = %e, "address validation failed reading response");
                ValidationStatus::Failed
            }
        }
    }
}

/// Map an HTTP response from the verification service into a status.
///
/// - 200 with a non-empty JSON array: the match candidates, verbatim
/// - 200 with an empty array: no deliverable match
/// - 200 with anything else: transport-level failure (the service only ever
///   answers with an array)
/// - non-200: API error, status logged but not surfaced
fn interpret_response(status: StatusCode, body: &str) -> ValidationStatus {
    if status != StatusCode::OK {
        tracing::warn!(status = %status, "SmartyStreets API error");
        return ValidationStatus::ApiError;
    }

    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(serde_json::Value::Array(candidates)) if candidates.is_empty() => {
            ValidationStatus::NoMatch
        }
        Ok(value @ serde_json::Value::Array(_)) => ValidationStatus::Verified(value),
        Ok(_) | Err(_) => {
            tracing::error!("SmartyStreets returned a malformed body");
            ValidationStatus::Failed
        }
    }
}
