use crate::calendar::{day_index, month_label, short_day_label, weekday_label_at};
use crate::models::{AggregatedDay, MonthlyPoint, SummaryResponse, TrendPoint, WeekdayTotal};
use chrono::Datelike;

const TOP_WEEKDAYS: usize = 3;
const TREND_WINDOW: usize = 3;

pub fn summarize(days: &[AggregatedDay]) -> SummaryResponse {
    let total = days
        .iter()
        .fold(0u64, |sum, day| sum.saturating_add(day.count));

    let mut peak: Option<AggregatedDay> = None;
    for day in days {
        if peak.is_none_or(|best| day.count > best.count) {
            peak = Some(*day);
        }
    }

    let mut per_weekday = [0u64; 7];
    let mut seen = [false; 7];
    for day in days {
        let idx = day_index(day.date);
        per_weekday[idx] = per_weekday[idx].saturating_add(day.count);
        seen[idx] = true;
    }

    let mut top_weekdays: Vec<WeekdayTotal> = (0..7)
        .filter(|idx| seen[*idx])
        .map(|idx| WeekdayTotal {
            day: weekday_label_at(idx).to_string(),
            count: per_weekday[idx],
        })
        .collect();
    // Stable sort keeps Monday-first order among equal totals.
    top_weekdays.sort_by(|a, b| b.count.cmp(&a.count));
    top_weekdays.truncate(TOP_WEEKDAYS);

    SummaryResponse {
        total,
        peak,
        top_weekdays,
    }
}

/// One point per calendar month that has at least one record, ascending.
pub fn monthly_distribution(days: &[AggregatedDay]) -> Vec<MonthlyPoint> {
    let mut months: Vec<MonthlyPoint> = Vec::new();

    for day in days {
        let (year, month) = (day.date.year(), day.date.month());
        match months.last_mut() {
            Some(point) if point.year == year && point.month == month => {
                point.total = point.total.saturating_add(day.count);
                point.days += 1;
            }
            _ => months.push(MonthlyPoint {
                year,
                month,
                label: month_label(day.date),
                total: day.count,
                days: 1,
                daily_average: 0.0,
            }),
        }
    }

    for point in &mut months {
        point.daily_average = round_one(point.total as f64 / f64::from(point.days));
    }
    months
}

/// Daily counts with a trailing moving average over the last three points.
pub fn daily_trend(days: &[AggregatedDay]) -> Vec<TrendPoint> {
    days.iter()
        .enumerate()
        .map(|(idx, day)| {
            let average = (idx + 1 >= TREND_WINDOW).then(|| {
                let window = &days[idx + 1 - TREND_WINDOW..=idx];
                let sum: f64 = window.iter().map(|point| point.count as f64).sum();
                round_one(sum / TREND_WINDOW as f64)
            });
            TrendPoint {
                date: day.date,
                label: short_day_label(day.date),
                count: day.count,
                average,
            }
        })
        .collect()
}

fn round_one(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grouping::aggregate_days;
    use crate::models::RawRecord;
    use chrono::NaiveDate;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn feed() -> Vec<AggregatedDay> {
        aggregate_days(&[
            RawRecord::new("01/01/2024", 3),
            RawRecord::new("02/01/2024", 8),
            RawRecord::new("08/01/2024", 4),
            RawRecord::new("02/01/2024", 1),
            RawRecord::new("03/02/2024", 5),
            RawRecord::new("nope", 99),
        ])
    }

    #[test]
    fn summary_totals_and_peak() {
        let summary = summarize(&feed());

        assert_eq!(summary.total, 21);
        assert_eq!(
            summary.peak,
            Some(AggregatedDay {
                date: ymd(2024, 1, 2),
                count: 9
            })
        );
        let labels: Vec<(&str, u64)> = summary
            .top_weekdays
            .iter()
            .map(|entry| (entry.day.as_str(), entry.count))
            .collect();
        assert_eq!(labels, vec![("Tue", 9), ("Mon", 7), ("Sat", 5)]);
    }

    #[test]
    fn summary_of_nothing() {
        let summary = summarize(&[]);
        assert_eq!(summary.total, 0);
        assert!(summary.peak.is_none());
        assert!(summary.top_weekdays.is_empty());
    }

    #[test]
    fn peak_prefers_the_earliest_day_on_ties() {
        let days = aggregate_days(&[
            RawRecord::new("05/01/2024", 4),
            RawRecord::new("03/01/2024", 4),
        ]);
        assert_eq!(summarize(&days).peak.map(|day| day.date), Some(ymd(2024, 1, 3)));
    }

    #[test]
    fn months_are_split_by_year_and_month() {
        let days = aggregate_days(&[
            RawRecord::new("30/01/2023", 2),
            RawRecord::new("01/01/2024", 1),
            RawRecord::new("02/01/2024", 1),
            RawRecord::new("03/01/2024", 2),
            RawRecord::new("10/02/2024", 6),
        ]);

        let months = monthly_distribution(&days);
        assert_eq!(months.len(), 3);
        assert_eq!((months[0].year, months[0].month, months[0].total), (2023, 1, 2));
        assert_eq!(months[1].label, "January");
        assert_eq!(months[1].days, 3);
        assert_eq!(months[1].daily_average, 1.3);
        assert_eq!(months[2].label, "February");
        assert_eq!(months[2].daily_average, 6.0);
    }

    #[test]
    fn trend_average_starts_at_the_third_point() {
        let trend = daily_trend(&feed());

        assert_eq!(trend.len(), 4);
        assert_eq!(trend[0].label, "Jan 01");
        assert_eq!(trend[0].average, None);
        assert_eq!(trend[1].average, None);
        assert_eq!(trend[2].average, Some(5.3));
        assert_eq!(trend[3].average, Some(6.0));
    }

    #[test]
    fn trend_average_survives_saturated_counts() {
        let days = aggregate_days(&[
            RawRecord::new("01/01/2024", u64::MAX),
            RawRecord::new("02/01/2024", u64::MAX),
            RawRecord::new("02/01/2024", 1),
            RawRecord::new("03/01/2024", 5),
        ]);

        let trend = daily_trend(&days);
        assert_eq!(trend[1].count, u64::MAX);
        let average = trend[2].average.expect("third point has an average");
        assert!(average > u64::MAX as f64 / 2.0);
        assert!(average < u64::MAX as f64);

        assert_eq!(summarize(&days).total, u64::MAX);
        assert_eq!(monthly_distribution(&days)[0].total, u64::MAX);
    }
}
