use std::path::Path;

use lexisync_config::LogFormat;
use tracing::Subscriber;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Everything from our crates, dependencies only from `info` up
const FILE_DIRECTIVES: &str = "info,lexisync=debug";

/// Install the global subscriber: console output at `level` (`RUST_LOG` wins)
/// and, when `log_file` is set, a debug log rotated daily at midnight.
///
/// The returned guard flushes the file on drop and must live until exit.
pub fn init_tracing(
    level: &str,
    format: LogFormat,
    log_file: Option<&Path>,
) -> anyhow::Result<Option<WorkerGuard>> {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let console = match format {
        LogFormat::Json => fmt::layer().json().with_filter(console_filter).boxed(),
        LogFormat::Text => fmt::layer()
            .with_ansi(atty::is(atty::Stream::Stdout))
            .with_filter(console_filter)
            .boxed(),
    };

    let (file, guard) = match log_file {
        Some(path) => {
            let (writer, guard) = file_writer(path)?;
            (Some(file_layer(writer)), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry().with(console).with(file).init();

    Ok(guard)
}

/// Non-blocking writer over a daily rolling file. Files are named
/// `<file name>.<date>` next to `path`.
pub fn file_writer(path: &Path) -> anyhow::Result<(NonBlocking, WorkerGuard)> {
    let directory = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let prefix = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "lexisync.log".to_string());

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(prefix)
        .build(directory)?;

    Ok(tracing_appender::non_blocking(appender))
}

fn file_layer<S>(writer: NonBlocking) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_file(true)
        .with_line_number(true)
        .with_filter(EnvFilter::new(FILE_DIRECTIVES))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn file_log_keeps_debug_events_of_our_crates_only() {
        let dir = tempfile::tempdir().unwrap();
        let (writer, guard) = file_writer(&dir.path().join("logs").join("lexisync.log")).unwrap();

        let subscriber = tracing_subscriber::registry().with(file_layer(writer));
        tracing::subscriber::with_default(subscriber, || {
            tracing::debug!(target: "lexisync::tasks", "Found 3 word(s)");
            tracing::debug!(target: "lexisync_notion::client", "Deleting page abc");
            tracing::debug!(target: "hyper::client", "connection pooled");
            tracing::error!(target: "hyper::client", "connection reset");
        });
        drop(guard);

        let files: Vec<_> = fs::read_dir(dir.path().join("logs"))
            .unwrap()
            .map(|entry| entry.unwrap().path())
            .collect();
        assert_eq!(files.len(), 1);
        assert!(
            files[0]
                .file_name()
                .unwrap()
                .to_string_lossy()
                .starts_with("lexisync.log.")
        );

        let content = fs::read_to_string(&files[0]).unwrap();
        assert!(content.contains("Found 3 word(s)"));
        assert!(content.contains("Deleting page abc"));
        assert!(content.contains("connection reset"));
        assert!(!content.contains("connection pooled"));
    }
}
