use anyhow::Result;
use steam_scraper::{app_state::AppState, config::Config, router, telemetry};
use tracing::info;

fn main() -> Result<()> {
    let config = Config::from_env()?;
    telemetry::init_tracing(config.log_format());

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(config.workers())
        .enable_all()
        .build()?;

    runtime.block_on(serve(config))
}

async fn serve(config: Config) -> Result<()> {
    let state = AppState::from_config(&config)?;
    let app = router::app(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    info!(
        workers = config.workers(),
        upstream = %config.upstream_base_url(),
        "Starting server on http://{}",
        config.bind_addr()
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
