use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::Client;

use homepage_domain::ports::ActivitySource;
use homepage_domain::ActivityEvent;

use crate::clients::fetch::fetch_json;

/// The events endpoint caps a page at 100 entries.
const EVENTS_PER_PAGE: u32 = 100;

pub struct GitHubClient {
    http: Client,
    api_base: String,
    token: Option<String>,
}

impl GitHubClient {
    pub fn new(http: Client, api_base: impl Into<String>, token: Option<String>) -> Self {
        Self {
            http,
            api_base: api_base.into(),
            token,
        }
    }

    pub fn events_url(&self, username: &str) -> String {
        format!(
            "{}/users/{}/events?per_page={}",
            self.api_base.trim_end_matches('/'),
            username,
            EVENTS_PER_PAGE
        )
    }
}

#[async_trait]
impl ActivitySource for GitHubClient {
    async fn fetch_events(&self, username: &str) -> anyhow::Result<Vec<ActivityEvent>> {
        let url = self.events_url(username);
        let mut request = self
            .http
            .get(&url)
            .header(ACCEPT, "application/vnd.github+json");
        if let Some(token) = &self.token {
            request = request.header(AUTHORIZATION, format!("Bearer {}", token));
        }
        let events = fetch_json(request, &url).await?;
        Ok(events)
    }
}
