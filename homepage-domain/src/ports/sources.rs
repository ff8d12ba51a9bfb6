use async_trait::async_trait;

use crate::entities::{ActivityEvent, PlayerProfile, Project};

#[async_trait]
pub trait ProjectSource: Send + Sync {
    async fn fetch_projects(&self, username: &str) -> anyhow::Result<Vec<Project>>;
}

#[async_trait]
pub trait ActivitySource: Send + Sync {
    async fn fetch_events(&self, username: &str) -> anyhow::Result<Vec<ActivityEvent>>;
}

#[async_trait]
pub trait ProfileSource: Send + Sync {
    async fn fetch_profile(&self, username: &str) -> anyhow::Result<PlayerProfile>;
}
