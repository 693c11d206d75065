use anyhow::Result;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use coroinhas_backend::config::load_config;
use coroinhas_backend::{create_router, initialize_backend};

#[tokio::main]
async fn main() -> Result<()> {
    let settings = load_config()?;

    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&settings.log_level))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let app_state = initialize_backend(&settings).await?;
    let app = create_router(app_state, settings.request_timeout());

    let addr = settings.bind_address();
    let listener = TcpListener::bind(&addr).await?;
    info!("App running on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
