use std::time::Duration;

use anyhow::Result;
use reqwest::Client;

use homepage_domain::ApiConfig;

/// Shared HTTP client for every API source.
pub fn build_http_client(config: &ApiConfig) -> Result<Client> {
    let client = Client::builder()
        .timeout(Duration::from_secs(config.request_timeout_seconds.max(1)))
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(client)
}
