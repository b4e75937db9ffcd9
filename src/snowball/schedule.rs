use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::types::{DebtId, DebtRecord};

/// one debt's allocation for a single month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentScheduleEntry {
    pub debt_id: DebtId,
    pub minimum_payment: Money,
    pub monthly_payment: Money,
    pub snowball_position: u32,
}

/// one month's allocation across all debts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyPaymentSchedule {
    pub entries: Vec<PaymentScheduleEntry>,
    pub total_monthly_payment: Money,
}

/// Allocate a month's disposable income across ordered debts.
///
/// Every debt receives its minimum payment. When income covers the minimums,
/// the focused debt (position 1) also receives the surplus and the total
/// equals the income exactly. When income falls short, every debt still
/// receives its full stated minimum and the returned total exceeds the income
/// supplied — a deliberate underfunding signal to the caller, not an error.
pub fn calculate_monthly_payments(
    ordered: &[DebtRecord],
    disposable_income: Money,
) -> MonthlyPaymentSchedule {
    if ordered.is_empty() {
        return MonthlyPaymentSchedule {
            entries: Vec::new(),
            total_monthly_payment: Money::ZERO,
        };
    }

    let total_minimums: Money = ordered.iter().map(|d| d.minimum_payment).sum();
    let surplus = if disposable_income >= total_minimums {
        disposable_income - total_minimums
    } else {
        Money::ZERO
    };

    let entries = ordered
        .iter()
        .enumerate()
        .map(|(index, debt)| {
            let monthly_payment = if index == 0 {
                calculate_rollover(debt.minimum_payment, surplus)
            } else {
                debt.minimum_payment
            };

            PaymentScheduleEntry {
                debt_id: debt.id,
                minimum_payment: debt.minimum_payment,
                monthly_payment,
                snowball_position: debt.snowball_position,
            }
        })
        .collect();

    MonthlyPaymentSchedule {
        entries,
        total_monthly_payment: total_minimums + surplus,
    }
}

/// Combined payment once a cleared debt's capacity folds into the next one.
/// An exact, commutative sum with no special cases.
pub fn calculate_rollover(current_payment: Money, next_minimum: Money) -> Money {
    current_payment + next_minimum
}
