use std::sync::Arc;

use homepage_domain::ports::{ActivitySource, ProfileSource, ProjectSource, RenderTarget};
use homepage_domain::RuntimeConfig;

use crate::Metrics;

#[derive(Clone)]
pub struct AppState {
    pub config: RuntimeConfig,
    pub project_source: Arc<dyn ProjectSource>,
    pub activity_source: Arc<dyn ActivitySource>,
    pub profile_source: Arc<dyn ProfileSource>,
    pub target: Arc<dyn RenderTarget>,
    pub metrics: Arc<Metrics>,
}
