use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use homepage_domain::ports::{ActivitySource, ProfileSource, ProjectSource, RenderTarget};
use homepage_domain::{ActivityEvent, ContainerId, PlayerProfile, Project, RuntimeConfig};

use crate::{AppState, Metrics};

pub(crate) const CONTAINERS: [&str; 4] = [
    "modrinth-projects",
    "github-streak",
    "chess-last-online",
    "chess-last-online-relative",
];

pub(crate) struct Scripted<T> {
    response: Mutex<Result<T, String>>,
    calls: AtomicUsize,
}

impl<T: Clone> Scripted<T> {
    fn new(value: T) -> Self {
        Self {
            response: Mutex::new(Ok(value)),
            calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn set(&self, response: Result<T, String>) {
        *self.response.lock().expect("lock") = response;
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn next(&self) -> anyhow::Result<T> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.response
            .lock()
            .expect("lock")
            .clone()
            .map_err(anyhow::Error::msg)
    }
}

#[async_trait]
impl ProjectSource for Scripted<Vec<Project>> {
    async fn fetch_projects(&self, _username: &str) -> anyhow::Result<Vec<Project>> {
        self.next()
    }
}

#[async_trait]
impl ActivitySource for Scripted<Vec<ActivityEvent>> {
    async fn fetch_events(&self, _username: &str) -> anyhow::Result<Vec<ActivityEvent>> {
        self.next()
    }
}

#[async_trait]
impl ProfileSource for Scripted<PlayerProfile> {
    async fn fetch_profile(&self, _username: &str) -> anyhow::Result<PlayerProfile> {
        self.next()
    }
}

/// Container id -> current inner HTML (`None` until first write).
#[derive(Default)]
pub(crate) struct RecordingTarget {
    containers: Mutex<BTreeMap<String, Option<String>>>,
}

impl RecordingTarget {
    pub(crate) fn html(&self, id: &str) -> Option<String> {
        self.containers.lock().expect("lock").get(id).cloned().flatten()
    }
}

#[async_trait]
impl RenderTarget for RecordingTarget {
    async fn has_container(&self, id: &ContainerId) -> bool {
        self.containers.lock().expect("lock").contains_key(id.as_str())
    }

    async fn set_inner_html(&self, id: &ContainerId, html: &str) -> anyhow::Result<()> {
        let mut containers = self.containers.lock().expect("lock");
        let slot = containers
            .get_mut(id.as_str())
            .ok_or_else(|| anyhow::anyhow!("no container {}", id))?;
        *slot = Some(html.to_string());
        Ok(())
    }
}

pub(crate) struct TestHarness {
    pub projects: Arc<Scripted<Vec<Project>>>,
    pub events: Arc<Scripted<Vec<ActivityEvent>>>,
    pub profile: Arc<Scripted<PlayerProfile>>,
    pub target: Arc<RecordingTarget>,
    pub metrics: Arc<Metrics>,
}

impl TestHarness {
    pub(crate) fn new() -> Self {
        Self::without(&[])
    }

    /// Harness whose page lacks the listed containers.
    pub(crate) fn without(missing: &[&str]) -> Self {
        let target = RecordingTarget::default();
        {
            let mut containers = target.containers.lock().expect("lock");
            for id in CONTAINERS.iter().filter(|id| !missing.contains(*id)) {
                containers.insert(id.to_string(), None);
            }
        }
        Self {
            projects: Arc::new(Scripted::new(Vec::new())),
            events: Arc::new(Scripted::new(Vec::new())),
            profile: Arc::new(Scripted::new(PlayerProfile::default())),
            target: Arc::new(target),
            metrics: Arc::new(Metrics::default()),
        }
    }

    pub(crate) fn state(&self) -> AppState {
        AppState {
            config: RuntimeConfig {
                modrinth_username: "ivoternis".to_string(),
                modrinth_site_base: "https://modrinth.com".to_string(),
                github_username: "ivoternis".to_string(),
                chess_username: "ivoternis".to_string(),
                projects_container: ContainerId::from(CONTAINERS[0]),
                streak_container: ContainerId::from(CONTAINERS[1]),
                last_online_container: ContainerId::from(CONTAINERS[2]),
                last_online_relative_container: ContainerId::from(CONTAINERS[3]),
            },
            project_source: self.projects.clone(),
            activity_source: self.events.clone(),
            profile_source: self.profile.clone(),
            target: self.target.clone(),
            metrics: self.metrics.clone(),
        }
    }
}

pub(crate) fn project(slug: &str) -> Project {
    Project {
        title: slug.to_string(),
        description: format!("{} description", slug),
        slug: slug.to_string(),
        icon_url: None,
        categories: vec!["utility".to_string()],
        downloads: 1_000,
        project_type: None,
    }
}
