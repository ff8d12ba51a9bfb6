use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use homepage_application::{render_all_widgets, AppState};
use homepage_infrastructure::{AppConfig, FragmentTarget, HtmlPageTarget};

use crate::context::AppContext;

#[derive(Debug, Default, Clone)]
pub struct RunOptions {
    pub page: Option<String>,
    pub output: Option<String>,
    pub fragments: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputMode {
    /// Splice fragments into `input` and write the page to `output`.
    Page { input: PathBuf, output: PathBuf },
    /// Print `{container_id: html}` as JSON.
    Fragments,
}

impl OutputMode {
    pub fn resolve(config: &AppConfig, options: &RunOptions) -> Self {
        if options.fragments {
            return OutputMode::Fragments;
        }
        let input = options
            .page
            .clone()
            .unwrap_or_else(|| config.page_path.clone());
        let output = options
            .output
            .clone()
            .or_else(|| config.output_path.clone())
            .unwrap_or_else(|| input.clone());
        OutputMode::Page {
            input: PathBuf::from(input),
            output: PathBuf::from(output),
        }
    }
}

pub async fn run(config: AppConfig, options: RunOptions) -> Result<()> {
    match OutputMode::resolve(&config, &options) {
        OutputMode::Fragments => {
            let json = render_fragments(&config).await?;
            println!("{}", json);
        }
        OutputMode::Page { input, output } => {
            render_page(&config, &input, &output).await?;
        }
    }
    Ok(())
}

/// Renders every widget into the page at `input` and writes it to `output`.
pub async fn render_page(config: &AppConfig, input: &Path, output: &Path) -> Result<()> {
    let target = Arc::new(HtmlPageTarget::load(input).await?);
    let context = AppContext::new(config, target.clone())?;
    render(&context.state).await;
    target.write_to(output).await?;
    info!("wrote {}", output.display());
    Ok(())
}

/// Renders every widget into memory and returns the fragments as JSON.
pub async fn render_fragments(config: &AppConfig) -> Result<String> {
    let runtime = config.to_runtime_config();
    let target = Arc::new(FragmentTarget::new([
        runtime.projects_container,
        runtime.streak_container,
        runtime.last_online_container,
        runtime.last_online_relative_container,
    ]));
    let context = AppContext::new(config, target.clone())?;
    render(&context.state).await;
    Ok(serde_json::to_string_pretty(&target.fragments().await)?)
}

async fn render(state: &AppState) {
    let reports = render_all_widgets(state).await;
    info!(widgets = reports.len(), "render pass finished: {}", state.metrics.summary());
}
