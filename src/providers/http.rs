//! Shared HTTP plumbing: one `reqwest::Client` and the mapping from
//! transport/status/decoding failures onto [`FetchError`].

use log::{debug, warn};
use serde::de::DeserializeOwned;

use crate::core::fetch::FetchError;

/// GitHub rejects requests without a User-Agent; everyone else ignores it.
pub const USER_AGENT: &str = concat!("folio/", env!("CARGO_PKG_VERSION"));

/// Error bodies are kept short; some providers answer with whole HTML pages.
const MAX_ERROR_BODY: usize = 200;

#[derive(Clone, Debug)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_else(|e| {
                warn!("Falling back to default HTTP client: {}", e);
                reqwest::Client::new()
            });
        Self { client }
    }

    /// GETs `url` with `query` and decodes the JSON body as `T`.
    ///
    /// Exactly one request is made. Query values are never logged because
    /// they may carry an API key.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, FetchError> {
        debug!("GET {} ({} query params)", url, query.len());

        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        debug!("GET {} -> {}", url, status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("GET {} failed: {} - {}", url, status, body);
            return Err(FetchError::Status {
                status: status.as_u16(),
                body: truncate_body(body.trim()),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| {
            warn!("GET {} returned an unexpected body: {}", url, e);
            FetchError::Shape(e.to_string())
        })
    }
}

fn truncate_body(body: &str) -> String {
    if body.chars().count() <= MAX_ERROR_BODY {
        body.to_string()
    } else {
        let cut: String = body.chars().take(MAX_ERROR_BODY).collect();
        format!("{cut}...")
    }
}
