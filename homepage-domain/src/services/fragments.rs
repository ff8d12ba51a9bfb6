//! HTML fragments written into the host page containers.
//!
//! Every API-supplied string passes through [`escape_html`] before it lands
//! in markup.

use std::fmt::Display;

use chrono::{DateTime, TimeZone, Utc};

use crate::entities::{PlayerProfile, Project, Streak};
use crate::services::sanitize::{escape_html, format_downloads, truncate_description};
use crate::services::time_format::{format_absolute, format_relative};

pub const MAX_CATEGORIES: usize = 3;
pub const OPEN_STREAK_MARKER: &str = "+";

pub const NO_PROJECTS_MESSAGE: &str = "Keine Modrinth-Projekte gefunden.";
pub const PROJECTS_ERROR_MESSAGE: &str = "Fehler beim Laden der Modrinth-Projekte.";
pub const NO_ACTIVITY_MESSAGE: &str = "Keine GitHub-Aktivität gefunden.";
pub const ACTIVITY_ERROR_MESSAGE: &str = "Fehler beim Laden der GitHub-Aktivität.";
pub const NO_PROFILE_DATA_MESSAGE: &str = "Keine Daten verfügbar.";
pub const PROFILE_ERROR_MESSAGE: &str = "Fehler beim Laden des Chess.com-Profils.";

/// Static message paragraph used for placeholders and errors.
pub fn message_fragment(message: &str) -> String {
    format!("<p>{}</p>", message)
}

pub fn render_project_list(projects: &[Project], site_base: &str) -> String {
    if projects.is_empty() {
        return message_fragment(NO_PROJECTS_MESSAGE);
    }
    projects
        .iter()
        .map(|project| render_project_card(project, site_base))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn project_url(project: &Project, site_base: &str) -> String {
    format!(
        "{}/{}/{}",
        site_base.trim_end_matches('/'),
        project.effective_project_type(),
        project.slug
    )
}

pub fn render_project_card(project: &Project, site_base: &str) -> String {
    let title = escape_html(&project.title);
    let description = escape_html(&truncate_description(&project.description));

    let icon = match project.icon_url.as_deref() {
        Some(url) if !url.trim().is_empty() => format!(
            "<img src=\"{}\" alt=\"{} Icon\" class=\"project-card-icon\">",
            escape_html(url),
            title
        ),
        _ => String::new(),
    };

    let categories = if project.categories.is_empty() {
        String::new()
    } else {
        let tags = project
            .categories
            .iter()
            .take(MAX_CATEGORIES)
            .map(|category| {
                format!(
                    "<span class=\"project-card-category\">{}</span>",
                    escape_html(category)
                )
            })
            .collect::<String>();
        format!("<div class=\"project-card-categories\">{}</div>", tags)
    };

    format!(
        "<div class=\"project-card\">\
<div class=\"project-card-header\">{icon}\
<div class=\"project-card-text-content\">\
<h3 class=\"project-card-title\">{title}</h3>\
<p class=\"project-card-description\">{description}</p>\
</div></div>\
{categories}\
<div class=\"project-card-footer\">\
<span class=\"project-card-downloads\">Downloads: {downloads}</span>\
<a href=\"{url}\" target=\"_blank\" class=\"project-card-link\">Ansehen</a>\
</div></div>",
        icon = icon,
        title = title,
        description = description,
        categories = categories,
        downloads = format_downloads(project.downloads),
        url = escape_html(&project_url(project, site_base)),
    )
}

pub fn render_streak(streak: Option<Streak>) -> String {
    let Some(streak) = streak else {
        return message_fragment(NO_ACTIVITY_MESSAGE);
    };
    let marker = if streak.open { OPEN_STREAK_MARKER } else { "" };
    format!(
        "<span class=\"streak-count\">{}{}</span> <span class=\"streak-label\">Tage in Folge</span>",
        streak.days, marker
    )
}

pub fn render_last_online_absolute<Tz>(profile: &PlayerProfile, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match profile.last_online_at() {
        Some(instant) => time_fragment(&instant, &format_absolute(&instant, tz)),
        None => message_fragment(NO_PROFILE_DATA_MESSAGE),
    }
}

pub fn render_last_online_relative(profile: &PlayerProfile, now: &DateTime<Utc>) -> String {
    match profile.last_online_at() {
        Some(instant) => time_fragment(&instant, &format_relative(&instant, now)),
        None => message_fragment(NO_PROFILE_DATA_MESSAGE),
    }
}

fn time_fragment(instant: &DateTime<Utc>, text: &str) -> String {
    format!(
        "<time datetime=\"{}\">{}</time>",
        instant.to_rfc3339(),
        escape_html(text)
    )
}
