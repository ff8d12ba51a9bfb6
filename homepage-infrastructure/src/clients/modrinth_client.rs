use async_trait::async_trait;
use reqwest::Client;

use homepage_domain::ports::ProjectSource;
use homepage_domain::Project;

use crate::clients::fetch::fetch_json;

pub struct ModrinthClient {
    http: Client,
    api_base: String,
}

impl ModrinthClient {
    pub fn new(http: Client, api_base: impl Into<String>) -> Self {
        Self {
            http,
            api_base: api_base.into(),
        }
    }

    pub fn projects_url(&self, username: &str) -> String {
        format!(
            "{}/v2/user/{}/projects",
            self.api_base.trim_end_matches('/'),
            username
        )
    }
}

#[async_trait]
impl ProjectSource for ModrinthClient {
    async fn fetch_projects(&self, username: &str) -> anyhow::Result<Vec<Project>> {
        let url = self.projects_url(username);
        let projects = fetch_json(self.http.get(&url), &url).await?;
        Ok(projects)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::fetch::FetchError;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn decodes_projects_in_order() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2/user/ivoternis/projects"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {
                    "title": "First",
                    "description": "one",
                    "slug": "first",
                    "icon_url": null,
                    "categories": ["utility"],
                    "downloads": 42,
                    "project_type": "mod",
                    "followers": 3
                },
                {
                    "title": "Second",
                    "description": "two",
                    "slug": "second",
                    "icon_url": "https://cdn.example/icon.png",
                    "downloads": 7
                }
            ])))
            .mount(&server)
            .await;

        let client = ModrinthClient::new(Client::new(), server.uri());
        let projects = client.fetch_projects("ivoternis").await.expect("projects");
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].slug, "first");
        assert_eq!(projects[0].downloads, 42);
        assert!(projects[1].categories.is_empty());
        assert_eq!(projects[1].icon_url.as_deref(), Some("https://cdn.example/icon.png"));
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = ModrinthClient::new(Client::new(), server.uri());
        let err = client.fetch_projects("nobody").await.expect_err("404");
        match err.downcast_ref::<FetchError>() {
            Some(FetchError::Status { status, .. }) => assert_eq!(status.as_u16(), 404),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn wrong_shape_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"error": "nope"})))
            .mount(&server)
            .await;

        let client = ModrinthClient::new(Client::new(), server.uri());
        let err = client.fetch_projects("ivoternis").await.expect_err("shape");
        assert!(matches!(
            err.downcast_ref::<FetchError>(),
            Some(FetchError::Decode { .. })
        ));
    }

    #[tokio::test]
    async fn unreachable_host_is_a_network_error() {
        let client = ModrinthClient::new(Client::new(), "http://127.0.0.1:9");
        let err = client.fetch_projects("ivoternis").await.expect_err("network");
        assert!(matches!(
            err.downcast_ref::<FetchError>(),
            Some(FetchError::Network { .. })
        ));
    }
}
