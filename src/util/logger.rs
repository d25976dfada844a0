use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};
use tracing_appender::{non_blocking, non_blocking::WorkerGuard, rolling};

const LOG_DIR: &str = "logs";
const LOG_NAME: &str = "or-moving-backend";

fn console_filter() -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,or_moving_backend=debug"))
}

/// Console-only logging for development and tests.
pub fn init_console() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(console_filter())
        .with_target(true)
        .with_thread_ids(true)
        .with_level(true)
        .try_init();
}

/// Console logging plus daily-rolling plain and JSON files, each split into
/// an all-levels file and an errors-only file.
pub struct Logger {
    pub guards: Vec<WorkerGuard>,
}

impl Logger {
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let guards = Self::setup_logging()?;
        Ok(Logger { guards })
    }

    pub fn setup_logging() -> Result<Vec<WorkerGuard>, Box<dyn std::error::Error>> {
        std::fs::create_dir_all(LOG_DIR)?;

        let file_log_level = std::env::var("FILE_LOG_LEVEL").unwrap_or_else(|_| "debug".to_string());
        let error_file_log_level = std::env::var("ERROR_FILE_LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        let (general, general_guard) = non_blocking(rolling::daily(LOG_DIR, format!("{}.log", LOG_NAME)));
        let (errors, errors_guard) = non_blocking(rolling::daily(format!("{}/error", LOG_DIR), format!("{}-error.log", LOG_NAME)));
        let (general_json, general_json_guard) = non_blocking(rolling::daily(format!("{}/json", LOG_DIR), format!("{}.json", LOG_NAME)));
        let (errors_json, errors_json_guard) = non_blocking(rolling::daily(format!("{}/error/json", LOG_DIR), format!("{}-error.json", LOG_NAME)));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .pretty()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_filter(console_filter())
            )
            .with(
                fmt::layer()
                    .with_writer(general)
                    .with_ansi(false)
                    .with_file(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new(&file_log_level))
            )
            .with(
                fmt::layer()
                    .with_writer(errors)
                    .with_ansi(false)
                    .with_file(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new(&error_file_log_level))
            )
            .with(
                fmt::layer()
                    .json()
                    .with_writer(general_json)
                    .with_file(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new(&file_log_level))
            )
            .with(
                fmt::layer()
                    .json()
                    .with_writer(errors_json)
                    .with_file(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new(&error_file_log_level))
            )
            .try_init()?;

        // Dropping a guard stops its background writer.
        Ok(vec![general_guard, errors_guard, general_json_guard, errors_json_guard])
    }
}
