use std::collections::BTreeMap;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use tokio::sync::Mutex;

use homepage_domain::ports::RenderTarget;
use homepage_domain::ContainerId;

/// Collects rendered fragments per container instead of editing a page.
pub struct FragmentTarget {
    containers: Mutex<BTreeMap<ContainerId, Option<String>>>,
}

impl FragmentTarget {
    pub fn new(ids: impl IntoIterator<Item = ContainerId>) -> Self {
        Self {
            containers: Mutex::new(ids.into_iter().map(|id| (id, None)).collect()),
        }
    }

    /// Containers that received content, keyed by id.
    pub async fn fragments(&self) -> BTreeMap<String, String> {
        self.containers
            .lock()
            .await
            .iter()
            .filter_map(|(id, html)| html.as_ref().map(|html| (id.to_string(), html.clone())))
            .collect()
    }
}

#[async_trait]
impl RenderTarget for FragmentTarget {
    async fn has_container(&self, id: &ContainerId) -> bool {
        self.containers.lock().await.contains_key(id)
    }

    async fn set_inner_html(&self, id: &ContainerId, html: &str) -> Result<()> {
        let mut containers = self.containers.lock().await;
        let slot = containers
            .get_mut(id)
            .ok_or_else(|| anyhow!("unknown container '{}'", id))?;
        *slot = Some(html.to_string());
        Ok(())
    }
}
