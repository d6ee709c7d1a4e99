//! Error types for the API client, and extraction of server-provided
//! error messages from failed responses.

use serde::Deserialize;

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The request never produced a usable HTTP response (connect failure,
    /// timeout, invalid URL, or an unreadable/unparseable body).
    #[error("Request failed")]
    RequestFailed,
    /// The API returned a non-success status with a body snippet.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
}

/// Error envelope the API attaches to non-success responses.
///
/// Every level is optional: error bodies from proxies, gateways, or older
/// API versions may carry none of these fields.
#[derive(Deserialize)]
struct ErrorEnvelope {
    error: Option<ErrorDetail>,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: Option<String>,
}

impl Error {
    /// Returns the human-readable message embedded in a failed API response,
    /// if there is one.
    ///
    /// Only [`Error::HttpStatus`] carries a response body; every other error
    /// yields `None`. The body is read as the `{"error": {"message": ...}}`
    /// envelope, and a missing envelope, a missing message, or an empty
    /// message all count as "no message". Never panics, never mutates.
    ///
    /// Callers that need something to show the user are expected to pick
    /// their own fallback text when this returns `None`.
    pub fn api_message(&self) -> Option<String> {
        let Error::HttpStatus { body, .. } = self else {
            return None;
        };
        let envelope: ErrorEnvelope = serde_json::from_str(body).ok()?;
        envelope.error?.message.filter(|message| !message.is_empty())
    }
}
