use chrono::{Datelike, NaiveDate};

/// check if year is a leap year
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// actual day count of the calendar year (365 or 366)
pub fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// days in a given month
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 30,
    }
}

/// add calendar months to a date, clamping to the end of the target month
///
/// Jan 31 + 1 month lands on Feb 29 in a leap year and Feb 28 otherwise,
/// never on an invalid or spilled-over day.
pub fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    let total = date.year() * 12 + date.month0() as i32 + months as i32;
    let year = total.div_euclid(12);
    let month = total.rem_euclid(12) as u32 + 1;
    let day = date.day().min(days_in_month(year, month));

    // day is clamped into range, construction cannot fail
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(date)
}

/// whole calendar months between two dates (0 when `end` precedes `start`)
pub fn months_between(start: NaiveDate, end: NaiveDate) -> u32 {
    if end < start {
        return 0;
    }

    let mut months =
        (end.year() - start.year()) * 12 + end.month() as i32 - start.month() as i32;
    if end.day() < start.day().min(days_in_month(end.year(), end.month())) {
        months -= 1;
    }
    months.max(0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_leap_year() {
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2023));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
    }

    #[test]
    fn test_days_in_year() {
        assert_eq!(days_in_year(2024), 366);
        assert_eq!(days_in_year(2025), 365);
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 4), 30);
        assert_eq!(days_in_month(2024, 12), 31);
    }

    #[test]
    fn test_add_months_plain() {
        assert_eq!(add_months(date(2026, 1, 15), 1), date(2026, 2, 15));
        assert_eq!(add_months(date(2026, 1, 15), 12), date(2027, 1, 15));
        assert_eq!(add_months(date(2026, 11, 5), 3), date(2027, 2, 5));
    }

    #[test]
    fn test_add_months_end_of_month_clamp() {
        assert_eq!(add_months(date(2024, 1, 31), 1), date(2024, 2, 29));
        assert_eq!(add_months(date(2023, 1, 31), 1), date(2023, 2, 28));
        assert_eq!(add_months(date(2026, 3, 31), 1), date(2026, 4, 30));
        // clamping does not stick: the day is re-derived from the origin date
        assert_eq!(add_months(date(2024, 1, 31), 2), date(2024, 3, 31));
    }

    #[test]
    fn test_add_months_zero() {
        assert_eq!(add_months(date(2026, 6, 30), 0), date(2026, 6, 30));
    }

    #[test]
    fn test_months_between() {
        assert_eq!(months_between(date(2026, 1, 15), date(2026, 6, 15)), 5);
        assert_eq!(months_between(date(2026, 1, 15), date(2026, 6, 14)), 4);
        assert_eq!(months_between(date(2026, 6, 15), date(2026, 1, 15)), 0);
        assert_eq!(months_between(date(2026, 1, 31), date(2026, 2, 28)), 1);
    }
}
