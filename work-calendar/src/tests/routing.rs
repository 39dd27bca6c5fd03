use crate::routing::*;

#[test]
fn valid_years() {
    assert!(is_valid_year(1900, MIN_YEAR, MAX_YEAR));
    assert!(is_valid_year(2100, MIN_YEAR, MAX_YEAR));
    assert!(!is_valid_year(1899, MIN_YEAR, MAX_YEAR));
    assert!(!is_valid_year(2101, MIN_YEAR, MAX_YEAR));
    assert!(is_valid_year(1950, PICKER_YEAR_START, PICKER_YEAR_END));
    assert!(!is_valid_year(1949, PICKER_YEAR_START, PICKER_YEAR_END));
}

#[test]
fn ranges() {
    assert_eq!(year_range(2020, 2023).collect::<Vec<_>>(), [2020, 2021, 2022, 2023]);
    assert_eq!(year_range(2020, 2020).count(), 1);
    assert_eq!(year_range(2021, 2020).count(), 0);
    assert!(year_range(PICKER_YEAR_START, PICKER_YEAR_END).all(|y| is_valid_year(y, MIN_YEAR, MAX_YEAR)));
}

#[test]
fn resolve_year() {
    assert_eq!(Route::resolve("/year/2024", 2025), Route::Year(2024));
    assert_eq!(Route::resolve("/year/1900", 2025), Route::Year(1900));
    assert_eq!(Route::resolve("/year/2100/", 2025), Route::Year(2100));
}

#[test]
fn redirections() {
    for path in [
        "/",
        "",
        "/year",
        "/year/",
        "/year/1899",
        "/year/2101",
        "/year/abc",
        "/year/20x4",
        "/year/2024/01",
        "/month/2024",
        "/some/where/else",
    ] {
        assert_eq!(Route::resolve(path, 2025), Route::Redirect(2025), "{path}");
    }
}

#[test]
fn paths() {
    assert_eq!(Route::Year(1987).path(), "/year/1987");
    assert_eq!(Route::resolve("/nowhere", 2025).path(), "/year/2025");
    assert_eq!(Route::Redirect(2025).year(), 2025);
    assert_eq!(Route::Year(2024).to_string(), "year 2024");
}
