use anyhow::Result;
use tokio::net::TcpListener;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub mod algorithm;
pub mod config;
pub mod error;
pub mod mock;
pub mod routes;
pub mod types;

pub use algorithm::Algorithm;
pub use config::Config;
pub use error::{AppError, AppResult};

pub async fn run() -> Result<()> {
    // Load configuration first (needed for logging)
    let config = Config::from_env()?;

    // Initialize tracing using config
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.rust_log.clone()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let bind_address = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&bind_address).await?;
    tracing::info!("Quantum-Safe Vault API listening on http://{}", bind_address);

    let app = routes::create_router();
    let server = axum::serve(listener, app);

    tokio::select! {
        res = server => {
            if let Err(e) = res {
                tracing::error!("HTTP server failed: {}", e);
            }
        },
        _ = signal::ctrl_c() => {
            tracing::info!("Shutdown signal received. Shutting down...");
        }
    }

    Ok(())
}
