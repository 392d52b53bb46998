//! Trendix API Server
//!
//! HTTP front-end over the one-shot analysis core: health check, metrics
//! and the analysis endpoint. The service is stateless; every request
//! triggers a fresh fetch-and-analyze pass.

use dotenvy::dotenv;
use std::env;
use tokio::signal;
use tracing::{error, info};
use trendix::core::http::start_server;
use trendix::logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();

    // Initialize logging based on environment
    logging::init_logging();

    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    let env = trendix::config::get_environment();
    info!("Starting Trendix API Server");
    info!(environment = %env, "Environment");
    info!(port = port, "HTTP Server: http://0.0.0.0:{}", port);

    let server_handle = tokio::spawn(async move {
        if let Err(e) = start_server(port).await {
            error!(error = %e, "HTTP server error");
        }
    });

    info!("API server started, waiting for shutdown signal...");
    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Shutting down API server...");
            info!("API server stopped");
        }
        _ = server_handle => {
            error!("HTTP server stopped");
        }
    }

    Ok(())
}
