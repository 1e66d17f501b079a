//! HTTP client for the remote validation function.

use std::time::Duration;

use reqwest::Client;

use crate::models::{CreateSessionNoteInput, ValidationResult};

/// The fallback path depends on detecting unreachability rather than hanging,
/// so the request carries an explicit timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Client for the network-callable validation function.
#[derive(Debug, Clone)]
pub struct RemoteValidator {
    base_url: String,
    client: Client,
}

impl RemoteValidator {
    /// Create a client against the given API base URL (e.g.
    /// `http://localhost:17020/api/v1`).
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("HTTP client construction should not fail");
        Self {
            base_url: base_url.into(),
            client,
        }
    }

    /// Ask the remote function for a verdict on the candidate note.
    ///
    /// Any transport-level failure — unreachable host, timeout, non-2xx
    /// status — surfaces as an error so the caller can fall back to local
    /// validation.
    pub async fn validate(
        &self,
        input: &CreateSessionNoteInput,
    ) -> Result<ValidationResult, reqwest::Error> {
        let url = format!("{}/validate", self.base_url);
        let response = self.client.post(&url).json(input).send().await?;
        response.error_for_status()?.json().await
    }
}
