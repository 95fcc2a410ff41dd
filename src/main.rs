use sighting_weeks::config::DEFAULT_LOG_FILTER;
use sighting_weeks::{load_records, router, shutdown_on, AppState, Config};
use std::net::SocketAddr;
use tokio::fs;
use tracing::{info, warn};
use tracing_subscriber::fmt;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env();
    let (filter, filter_err) = config.env_filter();
    fmt().with_env_filter(filter).init();
    if let Some(err) = filter_err {
        warn!(filter = %config.log_filter, "invalid log filter, using {DEFAULT_LOG_FILTER}: {err}");
    }

    if let Some(parent) = config.data_path.parent() {
        fs::create_dir_all(parent).await?;
    }

    let records = load_records(&config.data_path).await;
    info!(records = records.len(), path = %config.data_path.display(), "feed loaded");
    let app = router(AppState::new(config.data_path.clone(), records));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_on(tokio::signal::ctrl_c()))
        .await?;

    info!("server stopped");
    Ok(())
}
