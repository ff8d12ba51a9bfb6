use chrono::Local;
use tracing::{debug, error};

use homepage_domain::{message_fragment, render_streak as render_streak_fragment, streak_from_events, ACTIVITY_ERROR_MESSAGE};

use crate::widgets::{ensure_container, write_fragment, WidgetOutcome};
use crate::{AppError, AppState};

pub async fn render_streak(state: &AppState) -> Result<WidgetOutcome, AppError> {
    let container = &state.config.streak_container;
    ensure_container(state, container).await?;

    let events = match state
        .activity_source
        .fetch_events(&state.config.github_username)
        .await
    {
        Ok(events) => events,
        Err(err) => {
            error!("failed to fetch github activity: {:#}", err);
            write_fragment(state, container, &message_fragment(ACTIVITY_ERROR_MESSAGE)).await?;
            return Ok(WidgetOutcome::Failed);
        }
    };

    let today = Local::now().date_naive();
    let streak = streak_from_events(&events, today, &Local);
    debug!(events = events.len(), ?streak, "streak calculated");

    write_fragment(state, container, &render_streak_fragment(streak)).await?;
    match streak {
        Some(_) => Ok(WidgetOutcome::Rendered),
        None => Ok(WidgetOutcome::Empty),
    }
}
