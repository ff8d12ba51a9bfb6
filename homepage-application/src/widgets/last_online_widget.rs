use chrono::{Local, Utc};
use tracing::{error, warn};

use homepage_domain::{
    message_fragment, render_last_online_absolute, render_last_online_relative,
    PROFILE_ERROR_MESSAGE,
};

use crate::widgets::{ensure_container, write_fragment, WidgetOutcome};
use crate::{AppError, AppState};

/// Fetches the player profile once and fills both the absolute and the
/// relative container. Only the absolute container is required.
pub async fn render_last_online(state: &AppState) -> Result<WidgetOutcome, AppError> {
    let absolute = &state.config.last_online_container;
    ensure_container(state, absolute).await?;

    let relative = &state.config.last_online_relative_container;
    let relative = if state.target.has_container(relative).await {
        Some(relative)
    } else {
        warn!("container '{}' not found, relative last-online skipped", relative);
        None
    };

    let profile = match state
        .profile_source
        .fetch_profile(&state.config.chess_username)
        .await
    {
        Ok(profile) => profile,
        Err(err) => {
            error!("failed to fetch chess.com profile: {:#}", err);
            let html = message_fragment(PROFILE_ERROR_MESSAGE);
            write_fragment(state, absolute, &html).await?;
            if let Some(relative) = relative {
                write_fragment(state, relative, &html).await?;
            }
            return Ok(WidgetOutcome::Failed);
        }
    };

    write_fragment(state, absolute, &render_last_online_absolute(&profile, &Local)).await?;
    if let Some(relative) = relative {
        let html = render_last_online_relative(&profile, &Utc::now());
        write_fragment(state, relative, &html).await?;
    }

    if profile.last_online_at().is_some() {
        Ok(WidgetOutcome::Rendered)
    } else {
        Ok(WidgetOutcome::Empty)
    }
}
