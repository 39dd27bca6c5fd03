#![doc = include_str!("../../README.md")]
// Enable doc_auto_cfg feature when building docs on the nightly channel
// (which will be the case for docs.rs).
#![allow(unexpected_cfgs)]
#![cfg_attr(all(doc, CHANNEL_NIGHTLY), feature(doc_auto_cfg))]

pub mod context;
pub mod dates;
pub mod error;
pub mod holidays;
pub mod localization;
pub mod matrix;
pub mod preferences;
pub mod production;
pub mod routing;
pub mod storage;

mod day_set;

#[cfg(test)]
mod tests;

// Public re-exports
pub use crate::context::{Context, DayAnnotation};
pub use crate::day_set::DaySet;
pub use crate::error::{Error, Result};
pub use crate::holidays::Holiday;
pub use crate::matrix::{DayCell, MonthData, MonthMatrix};
pub use crate::preferences::{Preferences, Selection, Theme};
pub use crate::production::{MonthCalendarData, ProductionCalendar};
pub use crate::routing::Route;

pub use day_spec_syntax::Error as DaySpecError;
