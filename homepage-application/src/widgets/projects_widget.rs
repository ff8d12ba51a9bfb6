use tracing::error;

use homepage_domain::{message_fragment, render_project_list, PROJECTS_ERROR_MESSAGE};

use crate::widgets::{ensure_container, write_fragment, WidgetOutcome};
use crate::{AppError, AppState};

pub async fn render_projects(state: &AppState) -> Result<WidgetOutcome, AppError> {
    let container = &state.config.projects_container;
    ensure_container(state, container).await?;

    let projects = match state
        .project_source
        .fetch_projects(&state.config.modrinth_username)
        .await
    {
        Ok(projects) => projects,
        Err(err) => {
            error!("failed to fetch modrinth projects: {:#}", err);
            write_fragment(state, container, &message_fragment(PROJECTS_ERROR_MESSAGE)).await?;
            return Ok(WidgetOutcome::Failed);
        }
    };

    let html = render_project_list(&projects, &state.config.modrinth_site_base);
    write_fragment(state, container, &html).await?;

    if projects.is_empty() {
        Ok(WidgetOutcome::Empty)
    } else {
        Ok(WidgetOutcome::Rendered)
    }
}
