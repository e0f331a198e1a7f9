//! Accrue calculator server entry point.

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use accrue_server::{Server, ServerConfig};

const DEFAULT_CONFIG_PATH: &str = "config/accrue.toml";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let explicit_path = std::env::args().nth(1);
    let config_path = explicit_path
        .clone()
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

    let (server_config, loaded_from) =
        if explicit_path.is_some() || std::path::Path::new(&config_path).exists() {
            (ServerConfig::from_file(&config_path)?, Some(config_path))
        } else {
            (ServerConfig::default(), None)
        };

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| server_config.log_filter.clone()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Accrue Server v{}", env!("CARGO_PKG_VERSION"));
    match loaded_from {
        Some(path) => info!("Loaded configuration from {}", path),
        None => info!("Using default configuration"),
    }

    let server = Server::new(server_config);
    server.start().await?;

    Ok(())
}
