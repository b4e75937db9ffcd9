use chrono::{Datelike, NaiveDate};

use crate::calendar::days_in_year;
use crate::decimal::{Money, Rate};

/// One day's interest charge against a balance, on a specific calendar date.
///
/// Divides the annual rate by the actual day count of that date's year
/// (365 or 366), for the exact-date calculations the standard monthly
/// projection does not need. Non-positive balance or rate yields zero.
pub fn daily_charge(balance: Money, annual_rate: Rate, on: NaiveDate) -> Money {
    if !balance.is_positive() || annual_rate.is_non_positive() {
        return Money::ZERO;
    }

    let basis = days_in_year(on.year());
    let daily_rate = annual_rate.daily_rate(basis);
    let interest = balance.as_decimal() * daily_rate.as_decimal();
    Money::from_decimal(interest).round_2dp()
}
