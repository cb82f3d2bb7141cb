use std::path::PathBuf;
use tracing_subscriber::{
    fmt,
    EnvFilter, layer::SubscriberExt, util::SubscriberInitExt,
};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use std::sync::OnceLock;
use tracing::Level;

static FILE_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// Initialize the application logger with both console and file outputs
pub fn init() -> Result<(), Box<dyn std::error::Error>> {
    // Create log directory if it doesn't exist
    let log_dir = get_log_directory();
    std::fs::create_dir_all(&log_dir)?;

    // Set up file appender with rotation
    let file_appender = RollingFileAppender::new(
        Rotation::DAILY,
        log_dir,
        "serieschat.log",
    );
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // The guard must stay alive for the lifetime of the application so the
    // background writer keeps flushing.
    let _ = FILE_GUARD.set(guard);

    // Initialize tracing subscriber with both console and file outputs
    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| {
            // Default to INFO for the app, WARN for dependencies
            EnvFilter::builder()
                .parse("warn,serieschat=info")
        })?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt::layer() // Console layer
            .with_target(true)
            .with_file(true)
            .with_line_number(true))
        .with(fmt::layer() // File layer
            .with_writer(non_blocking)
            .with_ansi(false) // Disable ANSI colors in log files
            .with_target(true)
            .with_file(true)
            .with_line_number(true))
        .init();

    tracing::info!("Logging initialized");
    Ok(())
}

/// Initialize simple console-only logging for development
pub fn init_simple(level: Level) -> Result<(), Box<dyn std::error::Error>> {
    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| {
            // Use provided level for app, WARN for dependencies
            let filter_str = format!("warn,serieschat={}", level.as_str().to_lowercase());
            EnvFilter::builder().parse(filter_str)
        })?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt::layer()
            .with_target(true)
            .with_file(true)
            .with_line_number(true))
        .init();

    tracing::info!("Simple logging initialized at level {}", level);
    Ok(())
}

/// Get the directory where log files will be stored
fn get_log_directory() -> PathBuf {
    let home_dir = dirs::home_dir().expect("Failed to find home directory");
    home_dir.join(".serieschat").join("logs")
}
