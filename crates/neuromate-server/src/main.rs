use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use neuromate_instruments::Catalog;
use neuromate_server::config::{LogFormat, ServerConfig};
use neuromate_server::state::AppState;
use neuromate_server::{create_router, sweeper};
use neuromate_session::SessionStore;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let config = ServerConfig::from_env()?;
    init_tracing(config.log_format);

    let sessions = Arc::new(SessionStore::new(Catalog::standard()));
    match config.session_ttl {
        Some(ttl) => {
            tokio::spawn(sweeper::run(
                Arc::clone(&sessions),
                ttl,
                config.sweep_interval,
            ));
        }
        None => tracing::warn!("session eviction disabled; abandoned sessions are kept forever"),
    }

    let app = create_router(AppState::new(sessions));

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    tracing::info!(bind = %config.bind, "neuromate listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match format {
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init(),
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
