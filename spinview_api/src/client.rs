//! HTTP client for the SpinView imagery API.

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    query::{Query, SpinQuery},
    types::{PaginatedResponse, Response, Spin, SpinDetail, SpinID},
    Error,
};

/// User agent sent with every request.
const USER_AGENT: &str = concat!("spinview-rs/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the SpinView imagery API.
///
/// Each request builds a fresh `reqwest::Client` with a 30-second timeout.
/// Transport failures map to [`Error::RequestFailed`]; non-success statuses
/// map to [`Error::HttpStatus`] with a snippet of the response body, from
/// which [`Error::api_message`] can recover the server's message.
pub struct Client {
    /// Base URL for the API. Defaults to `https://api.spinview.io`.
    base_api_url: String,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a new client pointing at the production SpinView API.
    pub fn new() -> Self {
        Self {
            base_api_url: "https://api.spinview.io".to_string(),
        }
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_api_url: base_url.to_string(),
        }
    }

    fn get_url(&self, path: &str, query: Option<&impl Query>) -> Result<Url, Error> {
        let url = Url::parse(format!("{}{}", &self.base_api_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::RequestFailed
        })?;
        Ok(match query {
            Some(query) => query.add_to_url(&url),
            None => url,
        })
    }

    async fn get<T, Q>(&self, path: &str, query: Option<&Q>) -> Result<T, Error>
    where
        T: DeserializeOwned,
        Q: Query,
    {
        let url = self.get_url(path, query)?;
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;
        let resp = client
            .get(url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get resource: {}", e);
                Error::RequestFailed
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        let parsed = serde_json::from_str::<T>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
            Error::RequestFailed
        })?;

        Ok(parsed)
    }

    /// Fetches a paginated list of spins matching the given query.
    pub async fn get_spins(&self, query: &SpinQuery) -> Result<PaginatedResponse<Spin>, Error> {
        self.get::<PaginatedResponse<Spin>, SpinQuery>("/v1/spins", Some(query))
            .await
    }

    /// Fetches a single spin, including its full frame set, by numeric ID.
    pub async fn get_spin(&self, spin_id: SpinID) -> Result<Response<SpinDetail>, Error> {
        self.get::<Response<SpinDetail>, SpinQuery>(
            format!("/v1/spins/{}", spin_id).as_str(),
            None,
        )
        .await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        format!("{}...[truncated]", &body[..MAX])
    }
}
