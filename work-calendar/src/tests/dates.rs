use chrono::{Datelike, NaiveDate, Weekday};

use crate::date;
use crate::dates::*;

#[test]
fn leap_years() {
    for year in (400..=2400).step_by(400) {
        assert!(is_leap_year(year), "{year}");
    }

    for year in (100..=2500).step_by(100).filter(|y| y % 400 != 0) {
        assert!(!is_leap_year(year), "{year}");
    }

    for year in (4..=2500).step_by(4).filter(|y| y % 100 != 0) {
        assert!(is_leap_year(year), "{year}");
    }

    assert!(!is_leap_year(2023));
    assert!(!is_leap_year(2025));
}

#[test]
fn month_lengths() {
    assert_eq!(days_in_month(2024, 1), 29);
    assert_eq!(days_in_month(2023, 1), 28);
    assert_eq!(days_in_month(2000, 1), 29);
    assert_eq!(days_in_month(1900, 1), 28);

    let lengths: Vec<_> = (0..12).map(|m| days_in_month(2023, m)).collect();
    assert_eq!(lengths, [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31]);
    assert_eq!(lengths.iter().sum::<u32>(), 365);
}

#[test]
fn month_lengths_match_chrono() {
    for year in [1900, 1999, 2000, 2023, 2024, 2100] {
        for month0 in 0..12 {
            let first = NaiveDate::from_ymd_opt(year, month0 + 1, 1).unwrap();
            let next = first.checked_add_months(chrono::Months::new(1)).unwrap();
            assert_eq!(days_in_month(year, month0) as i64, (next - first).num_days());
        }
    }
}

#[test]
#[should_panic]
fn month_out_of_range() {
    days_in_month(2024, 12);
}

#[test]
fn weekday_indexes() {
    // 2024-01-01 is a Monday
    let indexes: Vec<_> = (1..=7)
        .map(|day| weekday_index(NaiveDate::from_ymd_opt(2024, 1, day).unwrap()))
        .collect();

    assert_eq!(indexes, [0, 1, 2, 3, 4, 5, 6]);

    for date in date!("2023-12-25").iter_days().take(60) {
        let from_sunday = date.weekday().num_days_from_sunday();
        let expected = if from_sunday == 0 { 6 } else { from_sunday - 1 };
        assert_eq!(weekday_index(date), expected);
    }

    assert_eq!(weekday_index(date!("2025-06-15")), Weekday::Sun.num_days_from_monday());
}

#[test]
fn weekends() {
    let flags: Vec<_> = (0..7).map(is_weekend).collect();
    assert_eq!(flags, [false, false, false, false, false, true, true]);
}

#[test]
fn same_day() {
    let date = date!("2024-02-29");
    let late = date.and_hms_opt(23, 59, 59).unwrap();

    assert!(is_same_day(&date, &late));
    assert!(!is_same_day(&late, &date!("2024-03-01")));
    assert!(!is_same_day(&date, &date!("2023-02-28")));
    assert!(!is_same_day(&date, &date!("2025-02-28")));
}

#[test]
fn iso_format() {
    assert_eq!(format_iso_date(2024, 0, 1), "2024-01-01");
    assert_eq!(format_iso_date(1999, 8, 9), "1999-09-09");
    assert_eq!(format_iso_date(2100, 11, 31), "2100-12-31");
    assert_eq!(format_iso_date(2024, 5, 12), date!("2024-06-12").to_string());
}

#[test]
fn clock() {
    assert_eq!(current_year(), today().year());
}
