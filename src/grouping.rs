use crate::calendar::{day_index, parse_record_date, week_end, week_start};
use crate::errors::GroupingError;
use crate::models::{AggregatedDay, DaySlot, RawRecord, WeekBucket};
use chrono::{Duration, NaiveDate};
use std::collections::HashMap;
use tracing::warn;

/// Groups a raw feed into Monday..Sunday buckets.
///
/// Malformed dates are skipped, same-day records are summed and the
/// buckets come back in ascending order. Weeks without any record are not
/// emitted.
pub fn group_by_week(records: &[RawRecord]) -> Vec<WeekBucket> {
    fill_buckets(&aggregate_days(records))
}

/// Parse, aggregate and sort in one go.
pub fn aggregate_days(records: &[RawRecord]) -> Vec<AggregatedDay> {
    sort_chronologically(aggregate_by_date(parse_records(records)))
}

pub fn parse_records(records: &[RawRecord]) -> Vec<(NaiveDate, u64)> {
    records
        .iter()
        .filter_map(|record| match parse_record_date(&record.date) {
            Some(date) => Some((date, record.sightings)),
            None => {
                warn!(date = %record.date, "invalid date format skipped");
                None
            }
        })
        .collect()
}

pub fn aggregate_by_date<I>(entries: I) -> HashMap<NaiveDate, u64>
where
    I: IntoIterator<Item = (NaiveDate, u64)>,
{
    let mut totals = HashMap::new();
    for (date, count) in entries {
        let total: &mut u64 = totals.entry(date).or_default();
        *total = total.saturating_add(count);
    }
    totals
}

pub fn sort_chronologically(totals: HashMap<NaiveDate, u64>) -> Vec<AggregatedDay> {
    let mut days: Vec<AggregatedDay> = totals
        .into_iter()
        .map(|(date, count)| AggregatedDay { date, count })
        .collect();
    // Dates are unique keys, so the unstable sort is still deterministic.
    days.sort_unstable_by_key(|day| day.date);
    days
}

/// Buckets days that the caller has already sorted.
///
/// Returns [`GroupingError::Unsorted`] when `days` is not strictly ascending.
pub fn bucketize_weeks(days: &[AggregatedDay]) -> Result<Vec<WeekBucket>, GroupingError> {
    if let Some(pair) = days.windows(2).find(|pair| pair[0].date >= pair[1].date) {
        return Err(GroupingError::Unsorted {
            previous: pair[0].date,
            next: pair[1].date,
        });
    }
    Ok(fill_buckets(days))
}

fn fill_buckets(days: &[AggregatedDay]) -> Vec<WeekBucket> {
    let mut weeks = Vec::new();
    let mut open: Option<WeekBucket> = None;

    for day in days {
        let start = week_start(day.date);
        if let Some(finished) = open.take_if(|bucket| bucket.start_date != start) {
            weeks.push(finished);
        }
        let bucket = open.get_or_insert_with(|| empty_bucket(start));

        let slot = &mut bucket.days[day_index(day.date)];
        if slot.date == day.date {
            slot.count = slot.count.saturating_add(day.count);
        } else {
            debug_assert_eq!(slot.date, day.date, "week start arithmetic drifted");
            warn!(
                date = %day.date,
                slot = %slot.date,
                "date mismatch during week grouping"
            );
        }
    }

    weeks.extend(open);
    weeks
}

fn empty_bucket(start: NaiveDate) -> WeekBucket {
    WeekBucket {
        start_date: start,
        end_date: week_end(start),
        days: std::array::from_fn(|offset| DaySlot {
            date: start + Duration::days(offset as i64),
            count: 0,
        }),
    }
}
