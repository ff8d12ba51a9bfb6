use anyhow::{anyhow, Result};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};

pub const LOG_FILE_PREFIX: &str = "homepage-widgets.log";

type FileLayer = fmt::Layer<Registry, fmt::format::DefaultFields, fmt::format::Format, NonBlocking>;

/// Handle to the installed subscriber; the file writer slot starts empty.
pub struct LogHandle {
    file: reload::Handle<Option<FileLayer>, Registry>,
}

/// Installs stderr logging. Call before anything that may log, including
/// config loading.
pub fn init_logging() -> Result<LogHandle> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let (file_layer, file) = reload::Layer::new(None::<FileLayer>);

    tracing_subscriber::registry()
        .with(file_layer)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init()?;
    Ok(LogHandle { file })
}

impl LogHandle {
    /// Starts mirroring logs into a daily file under `dir`.
    /// Keep the returned guard alive until exit so buffered lines are flushed.
    pub fn attach_log_dir(&self, dir: &str) -> Result<WorkerGuard> {
        let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
        let (writer, guard) = tracing_appender::non_blocking(appender);
        let layer = fmt::layer().with_ansi(false).with_writer(writer);
        self.file
            .reload(Some(layer))
            .map_err(|err| anyhow!("failed to attach log file in {}: {}", dir, err))?;
        Ok(guard)
    }
}
