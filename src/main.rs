mod model;
mod server;

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config, error::AppError, router, scheduler::booking_expiry,
    service::payment::payu::PayuGateway, startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Arc::new(Config::from_env()?);

    let db = startup::connect_to_database(&config).await?;
    let http_client = startup::setup_reqwest_client(&config)?;
    let notifier = startup::setup_notifier(&config)?;
    let payu = PayuGateway::new(http_client, &config);

    let mut scheduler = booking_expiry::start_scheduler(
        db.clone(),
        config.booking_sweep_interval,
        config.booking_stale_after,
    )
    .await?;

    let app = router::router().with_state(AppState::new(db, config.clone(), payu, notifier));

    let listener = TcpListener::bind(config.server_addr).await?;
    tracing::info!("Starting server on {}", config.server_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped, shutting down scheduler");
    scheduler.shutdown().await?;

    Ok(())
}

/// Resolves on Ctrl+C, or on SIGTERM where available.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
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
}
