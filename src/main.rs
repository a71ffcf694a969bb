use anyhow::Context;
use tokio::signal;

use keyrhythm_server::{app, logging, AppState, Config, UserStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;

    // Initialize tracing
    logging::init_tracing(config.environment);

    tracing::info!("Starting Keyrhythm Server...");
    tracing::info!(
        "Environment: {}, Server: {}",
        config.environment,
        config.http_address
    );

    // Open storage and create the schema if needed
    let store = UserStore::open(&config.storage_path, config.idle_timeout())
        .await
        .context("failed to init storage")?;

    let state = AppState::new(store, config.clone());
    let router = app(state);

    let listener = tokio::net::TcpListener::bind(&config.http_address)
        .await
        .with_context(|| format!("failed to bind {}", config.http_address))?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
