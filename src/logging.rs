use std::fs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{Builder, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const LOG_DIR: &str = "logs";

/// Console logs share stdout with progress lines; stderr is left for failure diagnostics
const CONSOLE_WRITER: fn() -> std::io::Stdout = std::io::stdout;

/// Initializes console logging on stdout plus a daily-rotated JSON log file.
///
/// The returned guard flushes the file writer when dropped; keep it alive for the
/// whole run. If the log directory cannot be created, only the console layer is installed.
pub fn init_logging() -> Option<WorkerGuard> {
    let appender = fs::create_dir_all(LOG_DIR).ok().and_then(|_| {
        Builder::new()
            .rotation(Rotation::DAILY)
            .filename_prefix("yt-sample-data.log")
            .build(LOG_DIR)
            .ok()
    });

    let (file_layer, guard) = match appender {
        Some(appender) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (Some(fmt::layer().json().with_writer(writer)), Some(guard))
        }
        None => (None, None),
    };

    let console_layer = fmt::layer().with_writer(CONSOLE_WRITER);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("yt_sample_data=info"));

    // Keep an already-installed subscriber
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(console_layer)
        .try_init();

    guard
}
