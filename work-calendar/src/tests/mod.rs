mod dates;
mod matrix;
mod routing;

use std::sync::Arc;

use crate::production::ProductionCalendar;

/// A small calendar with hand-picked oddities.
fn sample_calendar() -> Arc<ProductionCalendar> {
    let calendar = ProductionCalendar::from_json(include_str!("data/sample-calendar.json"))
        .expect("invalid sample calendar");

    Arc::new(calendar)
}

#[macro_export]
macro_rules! date {
    ( $date: expr ) => {{
        use chrono::NaiveDate;
        NaiveDate::parse_from_str($date, "%Y-%m-%d").expect("invalid date literal")
    }};
}
