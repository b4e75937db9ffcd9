use chrono::NaiveDate;
use std::cmp::Ordering;

use crate::types::DebtRecord;

/// Order debts for the snowball strategy.
///
/// Two-tier comparator: CCJ debts precede all others regardless of balance,
/// sorted by earliest deadline; non-CCJ debts sort ascending by balance.
/// The sort is stable, so debts with equal keys keep their input order.
/// Returns a permutation of the input with `snowball_position` assigned 1..N;
/// position 1 is the focused debt. Idempotent and side-effect free.
pub fn order_debts(debts: &[DebtRecord]) -> Vec<DebtRecord> {
    let mut ordered = debts.to_vec();

    ordered.sort_by(|a, b| match (a.is_ccj, b.is_ccj) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (true, true) => deadline_key(a).cmp(&deadline_key(b)),
        (false, false) => a.balance.cmp(&b.balance),
    });

    for (index, debt) in ordered.iter_mut().enumerate() {
        debt.snowball_position = index as u32 + 1;
    }

    ordered
}

/// Deadline sort key for the CCJ tier. The caller guarantees CCJ debts carry
/// a deadline; a missing one sorts last rather than panicking.
fn deadline_key(debt: &DebtRecord) -> NaiveDate {
    debug_assert!(
        debt.ccj_deadline.is_some(),
        "ccj debt {} has no deadline",
        debt.id
    );
    debt.ccj_deadline.unwrap_or(NaiveDate::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::{Money, Rate};
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn plain(name: &str, balance: i64) -> DebtRecord {
        DebtRecord::new(
            name,
            Money::from_major(balance),
            Rate::from_percentage(dec!(15)),
            Money::from_major(25),
        )
    }

    fn ccj(name: &str, balance: i64, deadline: NaiveDate) -> DebtRecord {
        DebtRecord::new_ccj(
            name,
            Money::from_major(balance),
            Rate::from_percentage(dec!(10)),
            Money::from_major(100),
            deadline,
        )
    }

    #[test]
    fn test_ccj_precedes_larger_and_smaller_balances() {
        let debts = vec![
            plain("credit card", 500),
            ccj("court judgment", 2_000, date(2026, 6, 1)),
        ];

        let ordered = order_debts(&debts);

        assert_eq!(ordered[0].name, "court judgment");
        assert_eq!(ordered[1].name, "credit card");
        assert_eq!(ordered[0].snowball_position, 1);
        assert_eq!(ordered[1].snowball_position, 2);
    }

    #[test]
    fn test_ccj_tier_sorts_by_deadline() {
        let debts = vec![
            ccj("late judgment", 100, date(2027, 1, 1)),
            ccj("early judgment", 5_000, date(2026, 3, 1)),
        ];

        let ordered = order_debts(&debts);

        assert_eq!(ordered[0].name, "early judgment");
        assert_eq!(ordered[1].name, "late judgment");
    }

    #[test]
    fn test_non_ccj_tier_sorts_by_balance() {
        let debts = vec![
            plain("loan", 3_000),
            plain("store card", 250),
            plain("overdraft", 900),
        ];

        let ordered = order_debts(&debts);

        assert_eq!(ordered[0].name, "store card");
        assert_eq!(ordered[1].name, "overdraft");
        assert_eq!(ordered[2].name, "loan");
    }

    #[test]
    fn test_equal_keys_keep_input_order() {
        let deadline = date(2026, 6, 1);
        let debts = vec![
            ccj("first judgment", 800, deadline),
            ccj("second judgment", 200, deadline),
            plain("first card", 400),
            plain("second card", 400),
        ];

        let ordered = order_debts(&debts);

        assert_eq!(ordered[0].name, "first judgment");
        assert_eq!(ordered[1].name, "second judgment");
        assert_eq!(ordered[2].name, "first card");
        assert_eq!(ordered[3].name, "second card");
    }

    #[test]
    fn test_idempotent() {
        let debts = vec![
            plain("loan", 3_000),
            ccj("judgment", 2_000, date(2026, 6, 1)),
            plain("card", 250),
        ];

        let once = order_debts(&debts);
        let twice = order_debts(&once);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_and_single() {
        assert!(order_debts(&[]).is_empty());

        let single = vec![plain("only debt", 100)];
        let ordered = order_debts(&single);
        assert_eq!(ordered.len(), 1);
        assert_eq!(ordered[0].name, "only debt");
        assert_eq!(ordered[0].snowball_position, 1);
    }

    fn arb_debt() -> impl Strategy<Value = DebtRecord> {
        (any::<bool>(), 0i64..50_000, 0i64..2_000, 0u32..3_650).prop_map(
            |(is_ccj, balance, minimum, deadline_offset)| {
                if is_ccj {
                    ccj(
                        "judgment",
                        balance,
                        date(2026, 1, 1) + chrono::Duration::days(deadline_offset as i64),
                    )
                } else {
                    let mut debt = plain("card", balance);
                    debt.minimum_payment = Money::from_major(minimum);
                    debt
                }
            },
        )
    }

    proptest! {
        #[test]
        fn prop_output_is_permutation_of_input(debts in prop::collection::vec(arb_debt(), 0..12)) {
            let ordered = order_debts(&debts);

            prop_assert_eq!(ordered.len(), debts.len());
            for debt in &debts {
                prop_assert!(ordered.iter().any(|d| d.id == debt.id));
            }
        }

        #[test]
        fn prop_ccj_always_precede_non_ccj(debts in prop::collection::vec(arb_debt(), 0..12)) {
            let ordered = order_debts(&debts);

            let last_ccj = ordered.iter().rposition(|d| d.is_ccj);
            let first_plain = ordered.iter().position(|d| !d.is_ccj);
            if let (Some(last_ccj), Some(first_plain)) = (last_ccj, first_plain) {
                prop_assert!(last_ccj < first_plain);
            }
        }

        #[test]
        fn prop_tier_keys_are_monotonic(debts in prop::collection::vec(arb_debt(), 0..12)) {
            let ordered = order_debts(&debts);

            for pair in ordered.windows(2) {
                if pair[0].is_ccj && pair[1].is_ccj {
                    prop_assert!(pair[0].ccj_deadline <= pair[1].ccj_deadline);
                }
                if !pair[0].is_ccj && !pair[1].is_ccj {
                    prop_assert!(pair[0].balance <= pair[1].balance);
                }
            }
        }

        #[test]
        fn prop_positions_are_contiguous(debts in prop::collection::vec(arb_debt(), 0..12)) {
            let ordered = order_debts(&debts);

            for (index, debt) in ordered.iter().enumerate() {
                prop_assert_eq!(debt.snowball_position, index as u32 + 1);
            }
        }
    }
}
