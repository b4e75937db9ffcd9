use rust_decimal_macros::dec;

use crate::decimal::{Money, Rate};

/// One month's interest charge against a balance.
///
/// `balance × annual_rate / 12`, rounded half-up to 2 decimal places — the
/// charge is a posted amount, so it rounds here rather than at presentation.
/// Non-positive balance or rate yields zero.
pub fn monthly_charge(balance: Money, annual_rate: Rate) -> Money {
    if !balance.is_positive() || annual_rate.is_non_positive() {
        return Money::ZERO;
    }

    let interest = balance.as_decimal() * annual_rate.as_decimal() / dec!(12);
    Money::from_decimal(interest).round_2dp()
}
