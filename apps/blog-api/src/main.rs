//! # Blog API Server
//!
//! The main entry point for the Actix-web HTTP server.

use blog_api::telemetry::{TelemetryConfig, init_telemetry};
use blog_api::{AppConfig, run_server};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();

    tracing::info!("Starting Blog API on {}:{}", config.host, config.port);

    let server = run_server(&config).await.map_err(std::io::Error::other)?;

    // Runs until SIGINT/SIGTERM
    server.wait().await.map_err(std::io::Error::other)
}
