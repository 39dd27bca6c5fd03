use std::env;
use std::path::PathBuf;

use chrono::{Datelike, NaiveDate};

use work_calendar::dates::current_year;
use work_calendar::holidays::get_month_holidays;
use work_calendar::localization::Localize;
use work_calendar::routing::{year_range, PICKER_YEAR_END, PICKER_YEAR_START};
use work_calendar::storage::FileStorage;
use work_calendar::{Context, DayCell, MonthData, Preferences, Route};

const DEFAULT_STORAGE: &str = ".work-calendar.json";

const USAGE: &str = "Usage: ./calendar [YEAR | /year/YEAR] \
    [toggle-holidays | toggle-theme | select <YYYY-MM-DD> | clear | years]";

/// Guess a dark terminal from the `COLORFGBG` variable set by some terminal
/// emulators, eg. `15;0` for white on black.
fn prefers_dark() -> bool {
    env::var("COLORFGBG")
        .ok()
        .and_then(|val| val.rsplit(';').next()?.parse::<u8>().ok())
        .is_some_and(|bg| bg < 7 || bg == 8)
}

fn render_cell(ctx: &Context, prefs: &Preferences<FileStorage>, cell: &DayCell) -> String {
    let Some(day) = cell.as_day() else {
        return "    ".to_string();
    };

    let annotation = ctx.annotate(day.date);
    let has_data = ctx.production.has_data_for_year(day.date.year());

    let mark = if prefs.show_holidays() && annotation.holiday.is_some() {
        '!'
    } else if annotation.transferred {
        '+'
    } else if annotation.shortened {
        '*'
    } else if annotation.is_day_off(has_data) {
        '-'
    } else {
        ' '
    };

    let prefix = if prefs.selection().is_selected(day.date) {
        '>'
    } else if day.is_today {
        '='
    } else {
        ' '
    };

    format!("{prefix}{:>2}{mark}", cell.day().unwrap_or_default())
}

fn render_month(ctx: &Context, prefs: &Preferences<FileStorage>, month: &MonthData) {
    println!("{} {}", month.name, month.year);

    let header: Vec<_> = (0..7)
        .map(|idx| format!(" {:>2} ", ctx.locale.weekday_short(idx)))
        .collect();

    println!("{}", header.concat());

    for week in &month.matrix.weeks {
        let line: Vec<_> = week
            .iter()
            .map(|cell| render_cell(ctx, prefs, cell))
            .collect();

        println!("{}", line.concat().trim_end());
    }

    if prefs.show_holidays() {
        for (day, holiday) in get_month_holidays(month.month_index) {
            println!(" ! {day:>2}: {}", holiday.name);
        }
    }

    println!();
}

fn main() {
    let storage_path: PathBuf = env::var_os("WORK_CALENDAR_STORAGE")
        .map(Into::into)
        .unwrap_or_else(|| DEFAULT_STORAGE.into());

    let mut prefs = Preferences::load(FileStorage::open(&storage_path), prefers_dark());
    let ctx = Context::default();
    let mut args = env::args().skip(1).peekable();

    let path = match args.next_if(|arg| arg.starts_with('/') || arg.parse::<i32>().is_ok()) {
        Some(path) if path.starts_with('/') => path,
        Some(year) => format!("/year/{year}"),
        None => "/".to_string(),
    };

    let route = Route::resolve(&path, current_year());

    if path != "/" && matches!(route, Route::Redirect(_)) {
        eprintln!(" - `{path}` is not a valid calendar, going to {}", route.path());
    }

    match args.next().as_deref() {
        None => {}
        Some("toggle-holidays") => {
            let shown = prefs.toggle_holidays();
            println!(" - holidays: {}", if shown { "shown" } else { "hidden" });
        }
        Some("toggle-theme") => println!(" - theme: {}", prefs.toggle_theme()),
        Some("select") => {
            let raw = args.next().expect(USAGE);

            let date: NaiveDate = match raw.parse() {
                Ok(date) => date,
                Err(err) => panic!("invalid date `{raw}`: {err}"),
            };

            let selected = prefs.toggle_date(date);
            println!(" - {date}: {}", if selected { "selected" } else { "unselected" });
        }
        Some("clear") => prefs.clear_selection(),
        Some("years") => {
            let available: Vec<_> = ctx
                .production
                .available_years()
                .map(|year| year.to_string())
                .collect();

            let picker = year_range(PICKER_YEAR_START, PICKER_YEAR_END);
            println!(" - production calendar: {}", available.join(", "));
            println!(" - year picker: {}-{}", picker.start(), picker.end());
            return;
        }
        Some(other) => panic!("unknown command `{other}`\n{USAGE}"),
    }

    let year = route.year();
    println!(" - calendar: {}", route.path());
    println!(" - theme: {}", prefs.theme());
    println!(" - storage: {}", prefs.storage().path().display());

    if !ctx.production.has_data_for_year(year) {
        println!(" - no production calendar for {year}, showing weekends only");
    }

    println!();

    for month in ctx.build_year_calendar(year) {
        render_month(&ctx, &prefs, &month);
    }

    let selected: Vec<_> = prefs.selection().iter().map(|d| d.to_string()).collect();

    if !selected.is_empty() {
        println!("selected: {}", selected.join(", "));
    }

    println!("legend: - day off, + transferred day off, * shortened day, ! holiday, = today, > selected");
}
