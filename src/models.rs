use crate::calendar::{format_date_range, iso_week_number, weekday_label};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One entry of the sightings feed, date still in its `DD/MM/YYYY` wire form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    pub date: String,
    pub sightings: u64,
}

impl RawRecord {
    pub fn new(date: impl Into<String>, sightings: u64) -> Self {
        Self {
            date: date.into(),
            sightings,
        }
    }
}

/// Sum of all records sharing one calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatedDay {
    pub date: NaiveDate,
    pub count: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySlot {
    pub date: NaiveDate,
    pub count: u64,
}

/// A Monday..Sunday bucket. `days[i].date == start_date + i`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekBucket {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days: [DaySlot; 7],
}

impl WeekBucket {
    pub fn total(&self) -> u64 {
        self.days
            .iter()
            .fold(0u64, |sum, slot| sum.saturating_add(slot.count))
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DayView {
    pub date: NaiveDate,
    pub day: String,
    pub count: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WeekView {
    pub week_number: u32,
    pub label: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total: u64,
    pub days: Vec<DayView>,
}

impl WeekView {
    pub fn from_bucket(bucket: &WeekBucket) -> Self {
        Self {
            week_number: iso_week_number(bucket.start_date),
            label: format_date_range(bucket.start_date, bucket.end_date),
            start_date: bucket.start_date,
            end_date: bucket.end_date,
            total: bucket.total(),
            days: bucket
                .days
                .iter()
                .map(|slot| DayView {
                    date: slot.date,
                    day: weekday_label(slot.date).to_string(),
                    count: slot.count,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StoreResponse {
    pub stored: usize,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekdayTotal {
    pub day: String,
    pub count: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub total: u64,
    pub peak: Option<AggregatedDay>,
    pub top_weekdays: Vec<WeekdayTotal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyPoint {
    pub year: i32,
    pub month: u32,
    pub label: String,
    pub total: u64,
    pub days: u32,
    pub daily_average: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub label: String,
    pub count: u64,
    pub average: Option<f64>,
}
