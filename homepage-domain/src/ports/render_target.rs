use async_trait::async_trait;

use crate::value_objects::ContainerId;

/// Output sink holding the named containers widgets render into.
#[async_trait]
pub trait RenderTarget: Send + Sync {
    async fn has_container(&self, id: &ContainerId) -> bool;

    /// Replaces the inner HTML of `id`. Fails when the container is absent.
    async fn set_inner_html(&self, id: &ContainerId, html: &str) -> anyhow::Result<()>;
}
