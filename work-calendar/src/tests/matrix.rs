use chrono::{Datelike, NaiveDate};

use crate::date;
use crate::dates::{days_in_month, is_weekend, weekday_index};
use crate::localization::{Localize, Russian};
use crate::matrix::*;

fn assert_well_formed(year: i32, month0: u32) {
    let today = date!("2000-01-01");
    let matrix = build_month_matrix(year, month0, today);
    let days: Vec<_> = matrix.days().collect();

    assert_eq!(days.len() as u32, days_in_month(year, month0), "{year}-{month0}");

    // Days are listed in order, on the column of their weekday
    for (i, day) in days.iter().enumerate() {
        assert_eq!(day.date.day() as usize, i + 1);
        assert_eq!(day.date.month0(), month0);
        assert_eq!(day.is_weekend, is_weekend(weekday_index(day.date)));
    }

    for week in &matrix.weeks {
        for (col, cell) in week.iter().enumerate() {
            if let Some(date) = cell.date() {
                assert_eq!(weekday_index(date) as usize, col);
            }
        }
    }

    // Only the first and last weeks are padded
    let first_blanks = matrix.weeks[0].iter().take_while(|c| c.is_blank()).count();
    let first = NaiveDate::from_ymd_opt(year, month0 + 1, 1).unwrap();
    assert_eq!(first_blanks as u32, weekday_index(first));

    for week in &matrix.weeks[1..matrix.weeks.len() - 1] {
        assert!(week.iter().all(|c| !c.is_blank()));
    }

    assert!(matrix.weeks[0][first_blanks..].iter().all(|c| !c.is_blank()));

    let last_week = matrix.weeks.last().unwrap();
    let filled = last_week.iter().take_while(|c| !c.is_blank()).count();
    assert!(filled > 0);
    assert!(last_week[filled..].iter().all(DayCell::is_blank));
}

#[test]
fn all_months_are_well_formed() {
    for year in [1900, 1999, 2000, 2021, 2023, 2024, 2025, 2100] {
        for month0 in 0..12 {
            assert_well_formed(year, month0);
        }
    }
}

#[test]
fn february_starting_on_monday() {
    // 2021-02-01 is a Monday and February 2021 has 28 days
    let matrix = build_month_matrix(2021, 1, date!("2000-01-01"));
    assert_eq!(matrix.weeks.len(), 4);
    assert!(matrix.weeks.iter().flatten().all(|cell| !cell.is_blank()));
    assert_eq!(matrix.weeks[3][6].day(), Some(28));
}

#[test]
fn month_starting_on_sunday() {
    // 2023-01-01 is a Sunday
    let matrix = build_month_matrix(2023, 0, date!("2000-01-01"));
    let first_week = &matrix.weeks[0];

    assert!(first_week[..6].iter().all(DayCell::is_blank));
    assert_eq!(first_week[6].day(), Some(1));
    assert_eq!(matrix.weeks[1][0].day(), Some(2));
    assert_eq!(matrix.weeks.len(), 6);
}

#[test]
fn trailing_padding() {
    // 2024-03-31 is a Sunday, 2024-04-30 a Tuesday
    let march = build_month_matrix(2024, 2, date!("2000-01-01"));
    assert_eq!(march.weeks.last().unwrap()[6].day(), Some(31));

    let april = build_month_matrix(2024, 3, date!("2000-01-01"));
    let last = april.weeks.last().unwrap();
    assert_eq!(last[1].day(), Some(30));
    assert!(last[2..].iter().all(DayCell::is_blank));
}

#[test]
fn cells() {
    let matrix = build_month_matrix(2024, 5, date!("2024-06-12"));

    let blank = matrix.weeks[0][0];
    assert!(blank.is_blank());
    assert_eq!(blank.day(), None);
    assert_eq!(blank.date(), None);
    assert_eq!(blank.iso_date(), None);
    assert!(!blank.is_weekend());
    assert!(!blank.is_today());

    // 2024-06-01 is a Saturday
    let saturday = matrix.weeks[0][5];
    assert_eq!(saturday.day(), Some(1));
    assert_eq!(saturday.iso_date().as_deref(), Some("2024-06-01"));
    assert!(saturday.is_weekend());

    let today: Vec<_> = matrix.days().filter(|day| day.is_today).collect();
    assert_eq!(today.len(), 1);
    assert_eq!(today[0].date, date!("2024-06-12"));
    assert!(!today[0].is_weekend);
}

#[test]
fn today_outside_of_month() {
    let matrix = build_month_matrix(2024, 5, date!("2023-06-12"));
    assert!(matrix.days().all(|day| !day.is_today));
}

#[test]
fn invalid_month() {
    assert!(build_month_matrix(2024, 12, date!("2024-01-01")).weeks.is_empty());
    assert!(build_month_matrix(i32::MAX, 0, date!("2024-01-01")).weeks.is_empty());
}

#[test]
fn year_calendar() {
    let months = build_year_calendar(2024, date!("2024-07-04"), &Russian);
    assert_eq!(months.len(), 12);

    let names: Vec<_> = months.iter().map(|m| m.name.as_str()).collect();

    assert_eq!(
        names,
        [
            "Январь", "Февраль", "Март", "Апрель", "Май", "Июнь", "Июль", "Август", "Сентябрь",
            "Октябрь", "Ноябрь", "Декабрь",
        ],
    );

    for (month0, month) in (0..).zip(&months) {
        assert_eq!(month.month_index, month0);
        assert_eq!(month.year, 2024);
        assert_eq!(month.matrix, build_month_matrix(2024, month0, date!("2024-07-04")));
    }

    let total: usize = months.iter().map(|m| m.matrix.days().count()).sum();
    assert_eq!(total, 366);
    assert_eq!(months.iter().flat_map(|m| m.matrix.days()).filter(|d| d.is_today).count(), 1);
}

#[test]
fn custom_locale() {
    struct Numbers;

    impl Localize for Numbers {
        fn month_name(&self, month0: u32) -> &str {
            ["m1", "m2", "m3", "m4", "m5", "m6", "m7", "m8", "m9", "m10", "m11", "m12"]
                [month0 as usize]
        }

        fn weekday_short(&self, _weekday_index: u32) -> &str {
            "d"
        }
    }

    let months = build_year_calendar(2025, date!("2025-01-01"), &Numbers);
    assert_eq!(months[0].name, "M1");
    assert_eq!(months[11].name, "M12");
}
