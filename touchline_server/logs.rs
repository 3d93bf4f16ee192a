use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Sets up the logging configuration for the application.
///
/// Logs go to stdout and to a daily rotating file under `logs/`.
/// Levels come from `RUST_LOG`; without it, `info` everywhere and `debug` for
/// the touchline crates.
pub fn setup_logging() {
    let file_appender = tracing_appender::rolling::daily("logs", "touchline.log");
    let (non_blocking_file, guard_file) = tracing_appender::non_blocking(file_appender);

    let console_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_thread_ids(true)
        .with_target(true);

    let file_layer = fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false)
        .with_thread_ids(true)
        .with_target(true);

    let default_filter = "info,touchline=debug,touchline_app=debug,touchline_db=debug,touchline_web=debug";

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .init();

    // The file writer flushes on drop; it has to live for the whole process.
    std::mem::forget(guard_file);
}
