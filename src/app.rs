use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};
use std::future::Future;
use tracing::{error, info};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/records", get(handlers::get_records).post(handlers::add_records))
        .route("/api/weeks", get(handlers::get_weeks).post(handlers::group_weeks))
        .route("/api/weeks/latest", get(handlers::get_latest_week))
        .route("/api/summary", get(handlers::get_summary))
        .route("/api/monthly", get(handlers::get_monthly))
        .route("/api/trend", get(handlers::get_trend))
        .with_state(state)
}

/// Resolves once `signal` fires. If the listener cannot be installed the
/// error is logged and this never resolves, so the server keeps running.
pub async fn shutdown_on(signal: impl Future<Output = std::io::Result<()>>) {
    match signal.await {
        Ok(()) => info!("shutdown signal received"),
        Err(err) => {
            error!("failed to listen for shutdown signal: {err}");
            std::future::pending::<()>().await;
        }
    }
}
