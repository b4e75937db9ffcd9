use crate::decimal::{Money, Rate};
use crate::interest::monthly_charge;

/// Months required to clear a single balance under a fixed monthly payment
/// with monthly compounding.
///
/// Returns `Some(0)` when the balance is already clear, and `None` when the
/// payment cannot outpace interest or the balance does not clear within
/// `max_months` (see `config::DEFAULT_MAX_PROJECTION_MONTHS` for the standard
/// cap).
pub fn months_to_clear(
    balance: Money,
    annual_rate: Rate,
    monthly_payment: Money,
    max_months: u32,
) -> Option<u32> {
    if !balance.is_positive() {
        return Some(0);
    }
    if !monthly_payment.is_positive() {
        return None;
    }

    let mut remaining = balance;
    for month in 1..=max_months {
        let interest = monthly_charge(remaining, annual_rate);
        if monthly_payment <= interest {
            // payment swallowed by interest, the balance can never shrink
            return None;
        }

        remaining += interest;
        remaining -= monthly_payment.min(remaining);

        if remaining.is_zero() {
            return Some(month);
        }
    }

    None
}
