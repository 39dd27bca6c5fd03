//! Development module that shares the fuzzing logic between unit tests and
//! the actual fuzzing.

use arbitrary::Arbitrary;
use chrono::{Months, NaiveDate};

use work_calendar::matrix::build_month_matrix;
use work_calendar::production::parse_days;
use work_calendar::ProductionCalendar;

/// A fuzzing example
#[derive(Arbitrary, Clone, Debug)]
pub struct Data {
    pub days: String,
    pub year: i16,
    pub month0: u8,
}

/// Check invariants of the day list parser and of the month grid built for
/// the same input. Return `false` if the input is not worth keeping.
pub fn run_fuzz_days(data: Data) -> bool {
    if data.days.len() > 512 {
        return false;
    }

    let parsed = parse_days(&data.days);
    assert!(parsed.transferred_holidays.is_subset(parsed.non_working_days));

    // Parsing the canonical form gives the same sets
    let list = day_spec_syntax::parse(&data.days).expect("day lists never fail to parse");
    assert_eq!(parse_days(&list.to_string()), parsed);

    // Same data read from a calendar file
    let raw = serde_json::to_string(&data.days).expect("failed to encode day list");
    let json = format!(r#"{{ "2000": {{ "months": [{{ "month": 1, "days": {raw} }}] }} }}"#);
    let calendar = ProductionCalendar::from_json(&json).expect("invalid generated calendar");

    for day in 1..=31 {
        assert_eq!(
            calendar.is_non_working_day(2000, 0, day),
            parsed.non_working_days.contains(day),
        );
    }

    let year = i32::from(data.year);
    let month0 = u32::from(data.month0 % 12);
    let today = NaiveDate::from_ymd_opt(2000, 1, 1).expect("invalid fuzzing date");
    let matrix = build_month_matrix(year, month0, today);

    let last = NaiveDate::from_ymd_opt(year, month0 + 1, 1).and_then(|first| {
        let last = first.checked_add_months(Months::new(1))?.pred_opt()?;
        Some((first, last))
    });

    if let Some((first, last)) = last {
        assert_eq!(matrix.days().count() as i64, (last - first).num_days() + 1);
    }

    !parsed.non_working_days.is_empty() || !parsed.shortened_days.is_empty()
}
