use chrono::{Datelike, Duration, NaiveDate};

pub const RECORD_DATE_FORMAT: &str = "%d/%m/%Y";

const WEEKDAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Parses a feed date written exactly as `DD/MM/YYYY`.
///
/// chrono alone accepts single-digit fields and leading blanks, so the layout
/// is checked byte by byte before handing the string over.
pub fn parse_record_date(input: &str) -> Option<NaiveDate> {
    let bytes = input.as_bytes();
    if bytes.len() != 10 {
        return None;
    }
    let layout_ok = bytes.iter().enumerate().all(|(idx, byte)| match idx {
        2 | 5 => *byte == b'/',
        _ => byte.is_ascii_digit(),
    });
    if !layout_ok {
        return None;
    }

    NaiveDate::parse_from_str(input, RECORD_DATE_FORMAT).ok()
}

/// Monday on or before `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

pub fn week_end(date: NaiveDate) -> NaiveDate {
    week_start(date) + Duration::days(6)
}

/// 0 for Monday through 6 for Sunday.
pub fn day_index(date: NaiveDate) -> usize {
    date.weekday().num_days_from_monday() as usize
}

pub fn weekday_label(date: NaiveDate) -> &'static str {
    WEEKDAY_LABELS[day_index(date)]
}

pub fn weekday_label_at(index: usize) -> &'static str {
    WEEKDAY_LABELS[index % 7]
}

pub fn iso_week_number(date: NaiveDate) -> u32 {
    date.iso_week().week()
}

/// `"Mar 5 – Mar 11, 2024"`
pub fn format_date_range(start: NaiveDate, end: NaiveDate) -> String {
    format!("{} – {}", start.format("%b %-d"), end.format("%b %-d, %Y"))
}

pub fn month_label(date: NaiveDate) -> String {
    date.format("%B").to_string()
}

pub fn short_day_label(date: NaiveDate) -> String {
    date.format("%b %d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_day_month_year() {
        assert_eq!(parse_record_date("05/03/2024"), Some(ymd(2024, 3, 5)));
        assert_eq!(parse_record_date("29/02/2024"), Some(ymd(2024, 2, 29)));
    }

    #[test]
    fn rejects_anything_but_the_exact_layout() {
        for input in [
            "not-a-date",
            "",
            "5/3/2024",
            " 05/03/2024",
            "05/03/2024 ",
            "2024-03-05",
            "05-03-2024",
            "31/02/2024",
            "29/02/2023",
            "13/13/2024",
            "05/03/24",
        ] {
            assert_eq!(parse_record_date(input), None, "accepted {input:?}");
        }
    }

    #[test]
    fn week_start_is_previous_or_same_monday() {
        assert_eq!(week_start(ymd(2024, 1, 1)), ymd(2024, 1, 1));
        assert_eq!(week_start(ymd(2024, 1, 7)), ymd(2024, 1, 1));
        assert_eq!(week_start(ymd(2023, 12, 31)), ymd(2023, 12, 25));
        assert_eq!(week_start(ymd(2024, 3, 1)), ymd(2024, 2, 26));
        assert_eq!(week_end(ymd(2024, 3, 1)), ymd(2024, 3, 3));
    }

    #[test]
    fn weekday_labels_follow_iso_order() {
        assert_eq!(weekday_label(ymd(2024, 1, 1)), "Mon");
        assert_eq!(weekday_label(ymd(2024, 1, 3)), "Wed");
        assert_eq!(weekday_label(ymd(2023, 12, 31)), "Sun");
        assert_eq!(weekday_label_at(6), "Sun");
    }

    #[test]
    fn iso_week_numbers_across_year_ends() {
        assert_eq!(iso_week_number(ymd(2023, 12, 31)), 52);
        assert_eq!(iso_week_number(ymd(2024, 1, 1)), 1);
        assert_eq!(iso_week_number(ymd(2021, 1, 1)), 53);
        assert_eq!(iso_week_number(ymd(2024, 12, 30)), 1);
        assert_eq!(iso_week_number(ymd(2020, 12, 31)), 53);
    }

    #[test]
    fn date_range_label() {
        assert_eq!(
            format_date_range(ymd(2024, 3, 4), ymd(2024, 3, 10)),
            "Mar 4 – Mar 10, 2024"
        );
        assert_eq!(
            format_date_range(ymd(2023, 12, 25), ymd(2023, 12, 31)),
            "Dec 25 – Dec 31, 2023"
        );
    }

    #[test]
    fn month_and_day_labels() {
        assert_eq!(month_label(ymd(2024, 3, 5)), "March");
        assert_eq!(short_day_label(ymd(2024, 3, 5)), "Mar 05");
    }
}
