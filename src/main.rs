//! Redis Counter API Server
//!
//! Usage:
//!   cargo run
//!
//! Environment:
//!   PORT / COUNTER_PORT - Server port (default: 8080)
//!   COUNTER_HOST        - Server host (default: 0.0.0.0)
//!   REDIS_URL           - Redis URL (default: redis://127.0.0.1:6379/0)
//!   COUNTER_KEY         - Key holding the counter (default: counter:value)
//!   COUNTER_STORE       - redis | memory (default: redis)
//!   RUST_LOG            - Log filter (default: info)

use redis_counter::api::{create_router, AppState};
use redis_counter::{store, telemetry, CounterService, ServiceConfig};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    telemetry::init_logging();

    let config = ServiceConfig::from_env()?;
    let addr = config.bind_addr()?;

    info!(
        backend = config.store.as_str(),
        key = %config.counter_key,
        "Connecting to counter store"
    );
    let kv = store::connect(&config).await?;
    let counter = CounterService::new(kv, config.counter_key.clone());

    let state = Arc::new(AppState::new(counter));
    let app = create_router(state);

    info!("Redis counter API starting on http://{}", addr);
    info!("Endpoints:");
    info!("  GET  /api/counter            - Current value");
    info!("  POST /api/counter/increment  - Add 1");
    info!("  POST /api/counter/decrement  - Subtract 1");
    info!("  POST /api/counter/reset      - Set to 0");
    info!("  GET  /health                 - Health check");

    let listener = TcpListener::bind(addr).await?;

    let shutdown_signal = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    info!("Shutdown signal received, server stopped");
    Ok(())
}
