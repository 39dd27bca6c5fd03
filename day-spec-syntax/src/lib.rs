#![doc = include_str!("../README.md")]

#[macro_use]
extern crate pest_derive;

pub mod days;
pub mod error;

mod parser;


pub use days::{DayEntry, DayKind, DayList, MAX_DAY};
pub use error::{Error, Result};
pub use parser::parse;
