use crate::errors::AppError;
use crate::models::RawRecord;
use std::path::Path;
use tokio::fs;
use tracing::error;

/// Reads the stored feed. A missing or unreadable file yields an empty feed.
pub async fn load_records(path: &Path) -> Vec<RawRecord> {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(records) => records,
            Err(err) => {
                error!("failed to parse feed file: {err}");
                Vec::new()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Vec::new(),
        Err(err) => {
            error!("failed to read feed file: {err}");
            Vec::new()
        }
    }
}

pub async fn persist_records(path: &Path, records: &[RawRecord]) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(records).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}
