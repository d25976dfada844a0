use dotenv::dotenv;
use or_moving_backend::app::app::App;
use or_moving_backend::config::AppConfig;
use or_moving_backend::util::logger::{self, Logger};
use tracing::{info, warn, error};

#[tokio::main]
async fn main() {
    // Load environment variables before the logger reads RUST_LOG
    let dotenv_result = dotenv();

    let config = match AppConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Keep the guards alive for the lifetime of the server
    let _logger = if config.log_to_files {
        match Logger::new() {
            Ok(l) => Some(l),
            Err(e) => {
                logger::init_console();
                warn!("⚠️ File logging unavailable: {} (console only)", e);
                None
            }
        }
    } else {
        logger::init_console();
        None
    };

    info!("🚀 Starting Or Moving Backend");
    match dotenv_result {
        Ok(_) => info!("✅ Successfully loaded .env file"),
        Err(e) => warn!("⚠️ Failed to load .env file: {} (using system env vars)", e),
    }

    let app = match App::new(config).await {
        Ok(app) => app,
        Err(e) => {
            error!("Failed to initialise application: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = app.start().await {
        error!("Server stopped: {}", e);
        std::process::exit(1);
    }
}
