pub mod app;
pub mod calendar;
pub mod config;
pub mod errors;
pub mod grouping;
pub mod handlers;
pub mod models;
pub mod state;
pub mod stats;
pub mod storage;

pub use app::{router, shutdown_on};
pub use calendar::{format_date_range, iso_week_number, weekday_label};
pub use config::Config;
pub use errors::{AppError, GroupingError};
pub use grouping::{aggregate_days, bucketize_weeks, group_by_week};
pub use models::{AggregatedDay, DaySlot, RawRecord, WeekBucket};
pub use state::AppState;
pub use storage::load_records;
