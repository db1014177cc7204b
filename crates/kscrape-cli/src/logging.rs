use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global subscriber: stdout plus a daily rolling file
/// `<log_dir>/<file_name>.<date>`.
///
/// `RUST_LOG` takes precedence over `default_level`. Buffered file output is
/// flushed when the returned guard is dropped, so hold it for the whole run.
pub(crate) fn init(
    default_level: &str,
    log_dir: &Path,
    file_name: &str,
) -> anyhow::Result<WorkerGuard> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_level))?;

    let appender = tracing_appender::rolling::daily(log_dir, file_name);
    let (file_writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer())
        .with(fmt::layer().with_ansi(false).with_writer(file_writer))
        .try_init()?;

    Ok(guard)
}
