use anyhow::Result;
use clap::Parser;

use homepage_bootstrap::logging::init_logging;
use homepage_bootstrap::{run, RunOptions};
use homepage_infrastructure::AppConfig;

#[derive(Parser, Debug)]
#[command(name = "homepage-widgets")]
#[command(about = "Render homepage widgets into a host page", long_about = None)]
struct Args {
    /// Path to config file
    #[arg(short, long)]
    config: Option<String>,

    /// Host page containing the widget containers
    #[arg(short, long)]
    page: Option<String>,

    /// Where to write the rendered page (defaults to the host page itself)
    #[arg(short, long)]
    output: Option<String>,

    /// Print the rendered fragments as JSON instead of writing a page
    #[arg(long)]
    fragments: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let logging = init_logging()?;
    let config = match &args.config {
        Some(path) => AppConfig::load_required(path).await?,
        None => AppConfig::load().await?,
    };
    let _log_guard = match config.log_dir.as_deref() {
        Some(dir) => Some(logging.attach_log_dir(dir)?),
        None => None,
    };

    run(
        config,
        RunOptions {
            page: args.page,
            output: args.output,
            fragments: args.fragments,
        },
    )
    .await
}
