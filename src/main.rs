use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use abdm_core::{config::anchor_date_from_env_value, CoreConfig, RecordGenerator};
use api_rest::{router, AppState};

/// Default REST listen address.
const DEFAULT_REST_ADDR: &str = "0.0.0.0:5000";

/// Main entry point for the ABDM mock service
///
/// Resolves configuration once, then serves the REST API until interrupted.
///
/// # Environment Variables
/// - `ABDM_REST_ADDR`: REST server address (default: "0.0.0.0:5000")
/// - `ABDM_ANCHOR_DATE`: optional `YYYY-MM-DD`; pins "today" for fully reproducible records
/// - `RUST_LOG`: tracing filter directives
///
/// # Returns
/// * `Ok(())` - If the server starts and shuts down cleanly
/// * `Err(anyhow::Error)` - If configuration is invalid or the server fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("abdm_run=info".parse()?)
                .add_directive("abdm_core=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr: SocketAddr = std::env::var("ABDM_REST_ADDR")
        .unwrap_or_else(|_| DEFAULT_REST_ADDR.into())
        .parse()?;

    let anchor_date = anchor_date_from_env_value(std::env::var("ABDM_ANCHOR_DATE").ok())?;
    let cfg = CoreConfig::new(anchor_date);
    match cfg.anchor_date() {
        Some(date) => tracing::info!("++ Generated dates anchored to {}", date),
        None => tracing::info!("++ Generated dates follow the system clock"),
    }

    let app = router(AppState::new(RecordGenerator::from_config(&cfg)));

    tracing::info!("++ Starting ABDM mock REST on {}", rest_addr);
    let listener = tokio::net::TcpListener::bind(rest_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("-- ABDM mock REST stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {:?}", e);
        std::future::pending::<()>().await;
    }
}
