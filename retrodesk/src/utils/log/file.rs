use std::path::PathBuf;
use tracing::Subscriber;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;

const LOG_FILE_NAME: &str = "retrodesk.log";

/// Also write logs to `$XDG_CACHE_HOME/retrodesk/retrodesk.log`. The layer is
/// skipped if the directory can't be created.
pub fn add_layer<S>(subscriber: S) -> impl Subscriber + for<'span> LookupSpan<'span>
where
    S: Subscriber + for<'span> LookupSpan<'span>,
{
    let layer = log_dir().map(|dir| {
        let writer = tracing_appender::rolling::never(dir, LOG_FILE_NAME);
        tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(writer)
    });
    subscriber.with(layer)
}

fn log_dir() -> Option<PathBuf> {
    let dirs = xdg::BaseDirectories::with_prefix("retrodesk").ok()?;
    match dirs.create_cache_directory("") {
        Ok(dir) => Some(dir),
        Err(err) => {
            eprintln!("Couldn't create log directory: {err}");
            None
        }
    }
}
