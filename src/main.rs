use clap::Parser;
use pingecho::{build_router, config::Args};

/// Resolves when the process receives Ctrl-C
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (silently ignore if not found)
    // Must run before argument parsing so PINGECHO_* values are visible
    dotenvy::dotenv().ok();

    // Initialize tracing with filtering
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| {
            tracing_subscriber::EnvFilter::new(
                "pingecho=info,tower_http=info,hyper=off,tokio=off,tower=off"
            )
        });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .init();

    let config = Args::parse().into_config()?;
    let addr = config.socket_addr()?;
    let app = build_router(&config);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("pingecho started at http://{}", addr);
    tracing::info!("Ping message: {:?}", config.ping_message);
    tracing::info!("Routes:");
    for route in ["GET  /ping", "POST /echo", "GET  /schema"] {
        tracing::info!("  - {}", route);
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("pingecho stopped");
    Ok(())
}
