use std::sync::Arc;

use anyhow::Result;

use homepage_application::{AppState, Metrics};
use homepage_domain::ports::RenderTarget;
use homepage_infrastructure::{
    build_http_client, AppConfig, ChessComClient, GitHubClient, ModrinthClient,
};

pub struct AppContext {
    pub state: AppState,
}

impl AppContext {
    pub fn new(config: &AppConfig, target: Arc<dyn RenderTarget>) -> Result<Self> {
        let runtime_config = config.to_runtime_config();
        let api_config = config.to_api_config();
        let http = build_http_client(&api_config)?;

        let state = AppState {
            config: runtime_config,
            project_source: Arc::new(ModrinthClient::new(
                http.clone(),
                api_config.modrinth_api_base.clone(),
            )),
            activity_source: Arc::new(GitHubClient::new(
                http.clone(),
                api_config.github_api_base.clone(),
                api_config.github_token.clone(),
            )),
            profile_source: Arc::new(ChessComClient::new(http, api_config.chess_api_base)),
            target,
            metrics: Arc::new(Metrics::default()),
        };

        Ok(Self { state })
    }
}
