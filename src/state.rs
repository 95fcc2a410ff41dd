use crate::models::RawRecord;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub records: Arc<Mutex<Vec<RawRecord>>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, records: Vec<RawRecord>) -> Self {
        Self {
            data_path,
            records: Arc::new(Mutex::new(records)),
        }
    }
}
