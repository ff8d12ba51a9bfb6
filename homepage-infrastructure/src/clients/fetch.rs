use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} responded with status {status}")]
    Status { url: String, status: StatusCode },
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Sends `request`, requires a 2xx status, and decodes the JSON body.
pub async fn fetch_json<T: DeserializeOwned>(
    request: RequestBuilder,
    url: &str,
) -> Result<T, FetchError> {
    let response = request.send().await.map_err(|source| FetchError::Network {
        url: url.to_string(),
        source,
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status,
        });
    }

    let body = response.bytes().await.map_err(|source| FetchError::Network {
        url: url.to_string(),
        source,
    })?;
    debug!(url, bytes = body.len(), "response received");

    serde_json::from_slice(&body).map_err(|source| FetchError::Decode {
        url: url.to_string(),
        source,
    })
}
