use async_trait::async_trait;
use reqwest::Client;

use homepage_domain::ports::ProfileSource;
use homepage_domain::PlayerProfile;

use crate::clients::fetch::fetch_json;

pub struct ChessComClient {
    http: Client,
    api_base: String,
}

impl ChessComClient {
    pub fn new(http: Client, api_base: impl Into<String>) -> Self {
        Self {
            http,
            api_base: api_base.into(),
        }
    }

    pub fn profile_url(&self, username: &str) -> String {
        format!(
            "{}/pub/player/{}",
            self.api_base.trim_end_matches('/'),
            username.to_lowercase()
        )
    }
}

#[async_trait]
impl ProfileSource for ChessComClient {
    async fn fetch_profile(&self, username: &str) -> anyhow::Result<PlayerProfile> {
        let url = self.profile_url(username);
        let profile = fetch_json(self.http.get(&url), &url).await?;
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn decodes_last_online() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/pub/player/ivoternis"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "username": "ivoternis",
                "last_online": 1_791_547_200_i64,
                "joined": 1_600_000_000_i64
            })))
            .mount(&server)
            .await;

        let client = ChessComClient::new(Client::new(), server.uri());
        let profile = client.fetch_profile("IvoTernis").await.expect("profile");
        assert_eq!(profile.last_online, Some(1_791_547_200));
    }

    #[tokio::test]
    async fn missing_last_online_decodes_as_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"username": "ghost"})))
            .mount(&server)
            .await;

        let client = ChessComClient::new(Client::new(), server.uri());
        let profile = client.fetch_profile("ghost").await.expect("profile");
        assert!(profile.last_online.is_none());
    }

    #[tokio::test]
    async fn server_error_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let client = ChessComClient::new(Client::new(), server.uri());
        assert!(client.fetch_profile("ivoternis").await.is_err());
    }
}
