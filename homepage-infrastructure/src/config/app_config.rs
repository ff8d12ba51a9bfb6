use std::env;
use std::path::Path;

use anyhow::{anyhow, Result};
use serde::Deserialize;
use tokio::fs;
use tracing::warn;

use homepage_domain::{ApiConfig, ContainerId, RuntimeConfig};

use crate::config::validation::{validate_base_url, validate_username};

pub const CONFIG_ENV: &str = "HOMEPAGE_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "./homepage.toml";

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub modrinth_username: String,
    pub modrinth_api_base: String,
    pub modrinth_site_base: String,
    pub github_username: String,
    pub github_api_base: String,
    pub github_token: Option<String>,
    pub chess_username: String,
    pub chess_api_base: String,
    pub user_agent: String,
    pub request_timeout_seconds: u64,
    pub projects_container: String,
    pub streak_container: String,
    pub last_online_container: String,
    pub last_online_relative_container: String,
    pub page_path: String,
    pub output_path: Option<String>,
    pub log_dir: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            modrinth_username: "ivoternis".to_string(),
            modrinth_api_base: "https://api.modrinth.com".to_string(),
            modrinth_site_base: "https://modrinth.com".to_string(),
            github_username: "ivoternis".to_string(),
            github_api_base: "https://api.github.com".to_string(),
            github_token: None,
            chess_username: "ivoternis".to_string(),
            chess_api_base: "https://api.chess.com".to_string(),
            user_agent: format!("homepage-widgets/{}", env!("CARGO_PKG_VERSION")),
            request_timeout_seconds: 15,
            projects_container: "modrinth-projects".to_string(),
            streak_container: "github-streak".to_string(),
            last_online_container: "chess-last-online".to_string(),
            last_online_relative_container: "chess-last-online-relative".to_string(),
            page_path: "./index.html".to_string(),
            output_path: None,
            log_dir: None,
        }
    }
}

impl AppConfig {
    pub async fn load() -> Result<Self> {
        let path = env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from(&path).await
    }

    pub async fn load_from(path: &str) -> Result<Self> {
        Self::load_path(path, false).await
    }

    /// Like [`AppConfig::load_from`], but a missing file is an error. Used for
    /// paths the user named explicitly.
    pub async fn load_required(path: &str) -> Result<Self> {
        Self::load_path(path, true).await
    }

    async fn load_path(path: &str, required: bool) -> Result<Self> {
        let file_path = Path::new(path);
        let base_dir = file_path.parent();
        let mut config = if file_path.exists() {
            let content = fs::read_to_string(file_path).await?;
            Self::from_toml(&content)?
        } else if required {
            return Err(anyhow!("config file {} not found", path));
        } else {
            warn!("{} not found, using defaults", path);
            AppConfig::default()
        };
        config.apply_env_overrides();
        config.resolve_paths(base_dir);
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|err| anyhow!("invalid config: {}", err))
    }

    pub fn normalize(&mut self) {
        if let Some(token) = &self.github_token {
            if token.trim().is_empty() {
                self.github_token = None;
            }
        }
        if let Some(output) = &self.output_path {
            if output.trim().is_empty() {
                self.output_path = None;
            }
        }
        if let Some(log_dir) = &self.log_dir {
            if log_dir.trim().is_empty() {
                self.log_dir = None;
            }
        }
        self.modrinth_username = self.modrinth_username.trim().to_string();
        self.github_username = self.github_username.trim().to_string();
        self.chess_username = self.chess_username.trim().to_string();
        self.modrinth_api_base = trim_base(&self.modrinth_api_base);
        self.modrinth_site_base = trim_base(&self.modrinth_site_base);
        self.github_api_base = trim_base(&self.github_api_base);
        self.chess_api_base = trim_base(&self.chess_api_base);
    }

    fn resolve_paths(&mut self, base_dir: Option<&Path>) {
        let Some(base) = base_dir else {
            return;
        };
        self.page_path = resolve_path(base, &self.page_path);
        self.output_path = self.output_path.as_deref().map(|path| resolve_path(base, path));
        self.log_dir = self.log_dir.as_deref().map(|path| resolve_path(base, path));
    }

    pub fn validate(&self) -> Result<()> {
        validate_username("modrinth_username", &self.modrinth_username)?;
        validate_username("github_username", &self.github_username)?;
        validate_username("chess_username", &self.chess_username)?;
        validate_base_url("modrinth_api_base", &self.modrinth_api_base)?;
        validate_base_url("modrinth_site_base", &self.modrinth_site_base)?;
        validate_base_url("github_api_base", &self.github_api_base)?;
        validate_base_url("chess_api_base", &self.chess_api_base)?;
        if self.request_timeout_seconds == 0 {
            return Err(anyhow!("request_timeout_seconds must be greater than 0"));
        }
        if self.user_agent.trim().is_empty() {
            return Err(anyhow!("user_agent must not be empty"));
        }

        let mut containers = self.container_ids();
        if containers.iter().any(|id| id.trim().is_empty()) {
            return Err(anyhow!("container ids must not be empty"));
        }
        containers.sort();
        containers.dedup();
        if containers.len() != 4 {
            return Err(anyhow!("container ids must be distinct"));
        }
        Ok(())
    }

    fn container_ids(&self) -> Vec<&str> {
        vec![
            self.projects_container.as_str(),
            self.streak_container.as_str(),
            self.last_online_container.as_str(),
            self.last_online_relative_container.as_str(),
        ]
    }

    pub fn to_runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            modrinth_username: self.modrinth_username.clone(),
            modrinth_site_base: self.modrinth_site_base.clone(),
            github_username: self.github_username.clone(),
            chess_username: self.chess_username.clone(),
            projects_container: ContainerId::new(self.projects_container.clone()),
            streak_container: ContainerId::new(self.streak_container.clone()),
            last_online_container: ContainerId::new(self.last_online_container.clone()),
            last_online_relative_container: ContainerId::new(
                self.last_online_relative_container.clone(),
            ),
        }
    }

    pub fn to_api_config(&self) -> ApiConfig {
        ApiConfig {
            modrinth_api_base: self.modrinth_api_base.clone(),
            github_api_base: self.github_api_base.clone(),
            github_token: self.github_token.clone(),
            chess_api_base: self.chess_api_base.clone(),
            user_agent: self.user_agent.clone(),
            request_timeout_seconds: self.request_timeout_seconds,
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(value) = env::var("HOMEPAGE_MODRINTH_USERNAME") {
            self.modrinth_username = value;
        }
        if let Ok(value) = env::var("HOMEPAGE_MODRINTH_API_BASE") {
            self.modrinth_api_base = value;
        }
        if let Ok(value) = env::var("HOMEPAGE_MODRINTH_SITE_BASE") {
            self.modrinth_site_base = value;
        }
        if let Ok(value) = env::var("HOMEPAGE_GITHUB_USERNAME") {
            self.github_username = value;
        }
        if let Ok(value) = env::var("HOMEPAGE_GITHUB_API_BASE") {
            self.github_api_base = value;
        }
        if let Ok(value) = env::var("HOMEPAGE_GITHUB_TOKEN") {
            self.github_token = Some(value);
        }
        if let Ok(value) = env::var("HOMEPAGE_CHESS_USERNAME") {
            self.chess_username = value;
        }
        if let Ok(value) = env::var("HOMEPAGE_CHESS_API_BASE") {
            self.chess_api_base = value;
        }
        if let Ok(value) = env::var("HOMEPAGE_USER_AGENT") {
            self.user_agent = value;
        }
        if let Ok(value) = env::var("HOMEPAGE_REQUEST_TIMEOUT_SECONDS") {
            self.request_timeout_seconds = value.parse().unwrap_or(self.request_timeout_seconds);
        }
        if let Ok(value) = env::var("HOMEPAGE_PAGE_PATH") {
            self.page_path = value;
        }
        if let Ok(value) = env::var("HOMEPAGE_OUTPUT_PATH") {
            self.output_path = Some(value);
        }
        if let Ok(value) = env::var("HOMEPAGE_LOG_DIR") {
            self.log_dir = Some(value);
        }
    }
}

fn trim_base(value: &str) -> String {
    value.trim().trim_end_matches('/').to_string()
}

fn resolve_path(base: &Path, value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return trimmed.to_string();
    }
    let path = Path::new(trimmed);
    if path.is_absolute() {
        trimmed.to_string()
    } else {
        base.join(path).to_string_lossy().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = AppConfig::default();
        config.validate().expect("valid defaults");
        let runtime = config.to_runtime_config();
        assert_eq!(runtime.projects_container.as_str(), "modrinth-projects");
        assert_eq!(runtime.modrinth_site_base, "https://modrinth.com");
    }

    #[test]
    fn toml_overrides_selected_fields() {
        let mut config = AppConfig::from_toml(
            r#"
github_username = "someone"
github_api_base = "https://api.github.com/"
github_token = "  "
request_timeout_seconds = 5
"#,
        )
        .expect("parse");
        config.normalize();
        assert_eq!(config.github_username, "someone");
        assert_eq!(config.github_api_base, "https://api.github.com");
        assert!(config.github_token.is_none());
        assert_eq!(config.request_timeout_seconds, 5);
        assert_eq!(config.chess_username, "ivoternis");
    }

    #[test]
    fn duplicate_containers_are_rejected() {
        let config = AppConfig {
            streak_container: "modrinth-projects".to_string(),
            ..AppConfig::default()
        };
        let err = config.validate().expect_err("duplicate");
        assert!(err.to_string().contains("distinct"));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let config = AppConfig {
            request_timeout_seconds: 0,
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn relative_paths_resolve_against_config_dir() {
        let mut config = AppConfig {
            output_path: Some("public/index.html".to_string()),
            ..AppConfig::default()
        };
        config.resolve_paths(Some(Path::new("/srv/site")));
        assert_eq!(config.page_path, "/srv/site/./index.html");
        assert_eq!(config.output_path.as_deref(), Some("/srv/site/public/index.html"));
    }

    #[tokio::test]
    async fn load_from_file_resolves_and_validates() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("homepage.toml");
        std::fs::write(&path, "page_path = \"site/index.html\"\nchess_username = \"magnus\"\n")
            .expect("write config");

        let config = AppConfig::load_from(&path.to_string_lossy()).await.expect("load");
        assert_eq!(config.chess_username, "magnus");
        assert_eq!(
            config.page_path,
            dir.path().join("site/index.html").to_string_lossy()
        );
    }

    #[tokio::test]
    async fn missing_required_config_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("typo.toml");
        let path = path.to_string_lossy();

        let err = AppConfig::load_required(&path).await.expect_err("missing");
        assert!(err.to_string().contains("not found"));
        let fallback = AppConfig::load_from(&path).await.expect("defaults");
        assert_eq!(fallback.chess_username, "ivoternis");
    }
}
