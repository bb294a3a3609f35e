use calculation_api::{ServerConfig, create_router, telemetry};
use clap::Parser;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let config = ServerConfig::parse();

    telemetry::init_tracing(&config.log_level);

    tracing::info!("Starting Calculation API service");

    let app = create_router(&config);

    let listener = TcpListener::bind(config.bind).await?;

    tracing::info!("Listening on {}", config.bind);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Calculation API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
