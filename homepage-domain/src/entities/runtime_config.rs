// Runtime configuration handed to the application layer

use serde::{Deserialize, Serialize};

use crate::value_objects::ContainerId;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub modrinth_username: String,
    pub modrinth_site_base: String,
    pub github_username: String,
    pub chess_username: String,
    pub projects_container: ContainerId,
    pub streak_container: ContainerId,
    pub last_online_container: ContainerId,
    pub last_online_relative_container: ContainerId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub modrinth_api_base: String,
    pub github_api_base: String,
    pub github_token: Option<String>,
    pub chess_api_base: String,
    pub user_agent: String,
    pub request_timeout_seconds: u64,
}
