use chrono::NaiveDate;
use hourglass_rs::SafeTimeProvider;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::calendar::add_months;
use crate::config::ProjectionConfig;
use crate::decimal::Money;
use crate::interest::monthly_charge;
use crate::snowball::schedule::calculate_rollover;
use crate::types::{DebtId, DebtRecord};

/// one debt's movement within a single simulated month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyProjectionEntry {
    pub debt_id: DebtId,
    pub starting_balance: Money,
    pub interest_charged: Money,
    pub payment_applied: Money,
    pub ending_balance: Money,
    pub is_paid_off: bool,
}

/// full projection result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtFreeProjection {
    /// month the last balance reaches zero; `None` when the projection is
    /// infeasible (payment below minimums, or no convergence within the cap)
    pub debt_free_date: Option<NaiveDate>,
    pub months_to_debt_free: Option<u32>,
    /// one inner vec per simulated month, one entry per debt
    pub schedule: Vec<Vec<MonthlyProjectionEntry>>,
    pub total_interest_charged: Money,
    pub total_paid: Money,
}

impl DebtFreeProjection {
    pub fn is_feasible(&self) -> bool {
        self.debt_free_date.is_some()
    }

    /// 1-based month in which the given debt first reports paid off
    pub fn payoff_month(&self, debt_id: DebtId) -> Option<u32> {
        for (index, month) in self.schedule.iter().enumerate() {
            if month
                .iter()
                .any(|entry| entry.debt_id == debt_id && entry.is_paid_off)
            {
                return Some(index as u32 + 1);
            }
        }
        None
    }

    fn infeasible() -> Self {
        Self {
            debt_free_date: None,
            months_to_debt_free: None,
            schedule: Vec::new(),
            total_interest_charged: Money::ZERO,
            total_paid: Money::ZERO,
        }
    }
}

/// Simulate month-by-month payoff of ordered debts under a fixed total
/// payment capacity, until every balance reaches zero.
///
/// Each month, every unpaid debt accrues its monthly interest charge and then
/// receives its minimum payment; the focused debt (the first still-unpaid debt
/// in the original ordering) additionally receives whatever capacity the
/// cleared and remaining minimums leave over. Payments clamp at the accrued
/// balance, so no balance goes negative. The ordering is taken as supplied and
/// never re-sorted mid-simulation.
///
/// Infeasible inputs (payment below the combined minimums, or balances that
/// fail to converge within `config.max_months`) yield `None` date and month
/// count rather than an error. `time` supplies the start date for labeling.
pub fn project_debt_free_date(
    ordered: &[DebtRecord],
    monthly_payment: Money,
    time: &SafeTimeProvider,
    config: &ProjectionConfig,
) -> DebtFreeProjection {
    let start_date = time.now().date_naive();

    // callers only hand over active debts
    debug_assert!(ordered.iter().all(|d| d.is_active()));

    if ordered.is_empty() {
        return DebtFreeProjection {
            debt_free_date: Some(start_date),
            months_to_debt_free: Some(0),
            schedule: Vec::new(),
            total_interest_charged: Money::ZERO,
            total_paid: Money::ZERO,
        };
    }

    let total_minimums: Money = ordered.iter().map(|d| d.minimum_payment).sum();
    if monthly_payment < total_minimums {
        debug!(
            payment = %monthly_payment,
            minimums = %total_minimums,
            "payment below combined minimums, projection infeasible"
        );
        return DebtFreeProjection::infeasible();
    }

    debug!(
        debts = ordered.len(),
        payment = %monthly_payment,
        start = %start_date,
        "starting debt-free projection"
    );

    let mut balances: Vec<Money> = ordered.iter().map(|d| d.balance).collect();
    let mut schedule = Vec::new();
    let mut total_interest_charged = Money::ZERO;
    let mut total_paid = Money::ZERO;

    for month in 1..=config.max_months {
        let unpaid_minimums: Money = ordered
            .iter()
            .zip(&balances)
            .filter(|(_, balance)| balance.is_positive())
            .map(|(debt, _)| debt.minimum_payment)
            .sum();
        let surplus = monthly_payment - unpaid_minimums;
        let focused = balances.iter().position(|b| b.is_positive());

        let mut entries = Vec::with_capacity(ordered.len());
        for (index, debt) in ordered.iter().enumerate() {
            let starting_balance = balances[index];

            // cleared debts stay in the schedule but no longer move
            if !starting_balance.is_positive() {
                entries.push(MonthlyProjectionEntry {
                    debt_id: debt.id,
                    starting_balance: Money::ZERO,
                    interest_charged: Money::ZERO,
                    payment_applied: Money::ZERO,
                    ending_balance: Money::ZERO,
                    is_paid_off: true,
                });
                continue;
            }

            let interest_charged = monthly_charge(starting_balance, debt.annual_rate);
            let accrued = starting_balance + interest_charged;

            let nominal_payment = if focused == Some(index) {
                calculate_rollover(debt.minimum_payment, surplus)
            } else {
                debt.minimum_payment
            };
            // final payment caps at the accrued balance, never below zero
            let payment_applied = nominal_payment.min(accrued);
            let ending_balance = accrued - payment_applied;

            total_interest_charged += interest_charged;
            total_paid += payment_applied;
            balances[index] = ending_balance;

            entries.push(MonthlyProjectionEntry {
                debt_id: debt.id,
                starting_balance,
                interest_charged,
                payment_applied,
                ending_balance,
                is_paid_off: ending_balance.is_zero(),
            });
        }

        trace!(month, entries = entries.len(), "simulated month");
        schedule.push(entries);

        if balances.iter().all(|b| b.is_zero()) {
            let debt_free_date = add_months(start_date, month);
            debug!(months = month, date = %debt_free_date, "projection converged");
            return DebtFreeProjection {
                debt_free_date: Some(debt_free_date),
                months_to_debt_free: Some(month),
                schedule,
                total_interest_charged,
                total_paid,
            };
        }
    }

    debug!(cap = config.max_months, "projection hit month cap without converging");
    DebtFreeProjection {
        debt_free_date: None,
        months_to_debt_free: None,
        schedule,
        total_interest_charged,
        total_paid,
    }
}
