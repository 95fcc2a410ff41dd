use crate::errors::AppError;
use crate::grouping::{aggregate_days, group_by_week};
use crate::models::{MonthlyPoint, RawRecord, StoreResponse, SummaryResponse, TrendPoint, WeekView};
use crate::state::AppState;
use crate::stats::{daily_trend, monthly_distribution, summarize};
use crate::storage::persist_records;
use axum::{extract::State, Json};
use tracing::info;

pub async fn get_records(State(state): State<AppState>) -> Json<Vec<RawRecord>> {
    let records = state.records.lock().await;
    Json(records.clone())
}

pub async fn add_records(
    State(state): State<AppState>,
    Json(payload): Json<Vec<RawRecord>>,
) -> Result<Json<StoreResponse>, AppError> {
    if payload.is_empty() {
        return Err(AppError::bad_request("no records supplied"));
    }

    let mut records = state.records.lock().await;
    let mut updated = records.clone();
    updated.extend(payload.iter().cloned());
    persist_records(&state.data_path, &updated).await?;
    *records = updated;

    info!(stored = payload.len(), total = records.len(), "records appended");
    Ok(Json(StoreResponse {
        stored: payload.len(),
        total: records.len(),
    }))
}

pub async fn get_weeks(State(state): State<AppState>) -> Json<Vec<WeekView>> {
    let records = state.records.lock().await;
    Json(week_views(&records))
}

pub async fn group_weeks(Json(payload): Json<Vec<RawRecord>>) -> Json<Vec<WeekView>> {
    Json(week_views(&payload))
}

pub async fn get_latest_week(State(state): State<AppState>) -> Result<Json<WeekView>, AppError> {
    let records = state.records.lock().await;
    group_by_week(&records)
        .last()
        .map(|bucket| Json(WeekView::from_bucket(bucket)))
        .ok_or_else(|| AppError::not_found("no weeks with sightings"))
}

pub async fn get_summary(State(state): State<AppState>) -> Json<SummaryResponse> {
    let records = state.records.lock().await;
    Json(summarize(&aggregate_days(&records)))
}

pub async fn get_monthly(State(state): State<AppState>) -> Json<Vec<MonthlyPoint>> {
    let records = state.records.lock().await;
    Json(monthly_distribution(&aggregate_days(&records)))
}

pub async fn get_trend(State(state): State<AppState>) -> Json<Vec<TrendPoint>> {
    let records = state.records.lock().await;
    Json(daily_trend(&aggregate_days(&records)))
}

fn week_views(records: &[RawRecord]) -> Vec<WeekView> {
    group_by_week(records)
        .iter()
        .map(WeekView::from_bucket)
        .collect()
}
