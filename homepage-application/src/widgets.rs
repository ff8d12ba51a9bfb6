// Widget use-cases: fetch, render, write into the injected target

pub mod last_online_widget;
pub mod projects_widget;
pub mod streak_widget;

#[cfg(test)]
pub(crate) mod test_support;

use tracing::{error, info};

use homepage_domain::{ContainerId, WidgetKind};

use crate::{AppError, AppState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetOutcome {
    /// Data arrived and was rendered.
    Rendered,
    /// Data arrived but there was nothing to show; a placeholder was rendered.
    Empty,
    /// Fetching or decoding failed; the error message was rendered.
    Failed,
}

#[derive(Debug)]
pub struct WidgetReport {
    pub kind: WidgetKind,
    pub result: Result<WidgetOutcome, AppError>,
}

/// Launches all widgets together and waits for every one of them.
pub async fn render_all_widgets(state: &AppState) -> Vec<WidgetReport> {
    let (projects, streak, last_online) = tokio::join!(
        projects_widget::render_projects(state),
        streak_widget::render_streak(state),
        last_online_widget::render_last_online(state),
    );

    [
        (WidgetKind::Projects, projects),
        (WidgetKind::Streak, streak),
        (WidgetKind::LastOnline, last_online),
    ]
    .into_iter()
    .map(|(kind, result)| {
        match &result {
            Ok(outcome) => info!(widget = kind.as_str(), outcome = ?outcome, "widget finished"),
            Err(err) => error!(widget = kind.as_str(), "widget aborted: {}", err),
        }
        state.metrics.record(&result);
        WidgetReport { kind, result }
    })
    .collect()
}

pub(crate) async fn ensure_container(state: &AppState, id: &ContainerId) -> Result<(), AppError> {
    if state.target.has_container(id).await {
        return Ok(());
    }
    error!("container '{}' not found in host page", id);
    Err(AppError::MissingContainer(id.clone()))
}

pub(crate) async fn write_fragment(
    state: &AppState,
    id: &ContainerId,
    html: &str,
) -> Result<(), AppError> {
    state.target.set_inner_html(id, html).await?;
    Ok(())
}
