use pest::iterators::Pair;
use pest::Parser;

use crate::days::{DayEntry, DayKind, DayList, MAX_DAY};
use crate::error::{Error, Result};

#[derive(Parser)]
#[grammar = "grammar.pest"]
struct DaySpecParser;

/// Parse a day list such as `"1,2,9+,30*"`.
///
/// Tokens which are not a day of month are collected into
/// [`DayList::rejected`] instead of failing the whole list.
///
/// ```
/// use day_spec_syntax::{parse, DayEntry, DayKind};
///
/// let days = parse(" 9+ , 30*").unwrap();
///
/// assert_eq!(
///     days.entries,
///     [
///         DayEntry { day: 9, kind: DayKind::Transferred },
///         DayEntry { day: 30, kind: DayKind::Shortened },
///     ],
/// );
///
/// assert!(parse("").unwrap().is_empty());
/// ```
pub fn parse(data: &str) -> Result<DayList> {
    let day_list_pair = DaySpecParser::parse(Rule::input_day_list, data)
        .map_err(Error::from)?
        .next()
        .expect("grammar error: no day_list found");

    Ok(build_day_list(day_list_pair))
}

fn unexpected_token<T>(token: Rule, parent: Rule) -> T {
    unreachable!("Grammar error: found `{token:?}` inside of `{parent:?}`")
}

fn build_day_list(pair: Pair<Rule>) -> DayList {
    assert_eq!(pair.as_rule(), Rule::day_list);
    let mut res = DayList::default();

    for pair in pair.into_inner() {
        match pair.as_rule() {
            Rule::day => {
                let raw = pair.as_str().trim().to_string();

                match build_day(pair) {
                    Some(entry) => res.entries.push(entry),
                    None => reject(&mut res, raw),
                }
            }
            Rule::invalid => reject(&mut res, pair.as_str().trim().to_string()),
            other => unexpected_token(other, Rule::day_list),
        }
    }

    res
}

fn reject(list: &mut DayList, raw: String) {
    #[cfg(feature = "log")]
    log::warn!("Skipping invalid day `{raw}` in day list");

    list.rejected.push(raw);
}

/// Returns `None` if the number does not fit into a day of month.
fn build_day(pair: Pair<Rule>) -> Option<DayEntry> {
    assert_eq!(pair.as_rule(), Rule::day);
    let mut pairs = pair.into_inner();

    let day = build_day_number(pairs.next().expect("missing day number"))?;

    let kind = pairs
        .next()
        .map(build_day_suffix)
        .unwrap_or(DayKind::NonWorking);

    Some(DayEntry { day, kind })
}

fn build_day_number(pair: Pair<Rule>) -> Option<u8> {
    assert_eq!(pair.as_rule(), Rule::day_number);
    let day: u8 = pair.as_str().parse().ok()?;
    (1..=MAX_DAY).contains(&day).then_some(day)
}

fn build_day_suffix(pair: Pair<Rule>) -> DayKind {
    assert_eq!(pair.as_rule(), Rule::day_suffix);

    match pair
        .into_inner()
        .next()
        .expect("empty day suffix")
        .as_rule()
    {
        Rule::transferred_suffix => DayKind::Transferred,
        Rule::shortened_suffix => DayKind::Shortened,
        other => unexpected_token(other, Rule::day_suffix),
    }
}
