use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the log file for TUI mode.
pub const LOG_PATH_ENV: &str = "EMAIL_SUMMARY_LOG";

/// Initialize tracing for TUI mode.
///
/// Logging is disabled by default because stdout belongs to the terminal UI.
/// Set `EMAIL_SUMMARY_LOG` to a file path to enable it. The file is created
/// as `{path}.{timestamp}.{pid}` so concurrent instances do not clash.
pub fn init_tracing() {
    let Some(log_path) = std::env::var(LOG_PATH_ENV).ok() else {
        return;
    };

    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let unique_path = format!("{}.{}.{}", log_path, timestamp, pid);

    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!("Warning: Failed to create log file: {}", unique_path);
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(default_filter())
        .with(file_layer)
        .init();
}

/// Initialize tracing on stderr, for headless runs.
pub fn init_stderr_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(default_filter())
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .init();
}

fn default_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}
