/// ordering - CCJ priority ahead of the smallest-balance heuristic
use chrono::NaiveDate;
use debt_snowball::{order_debts, DebtRecord, Money, Rate};
use rust_decimal_macros::dec;

fn main() {
    println!("=== ordering example ===\n");

    // a county court judgment outranks every ordinary debt, however small
    let debts = vec![
        DebtRecord::new(
            "store card",
            Money::from_major(250),
            Rate::from_percentage(dec!(29.9)),
            Money::from_major(15),
        ),
        DebtRecord::new_ccj(
            "council tax judgment",
            Money::from_major(2_000),
            Rate::from_percentage(dec!(10)),
            Money::from_major(100),
            NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(),
        ),
        DebtRecord::new_ccj(
            "utility judgment",
            Money::from_major(600),
            Rate::from_percentage(dec!(8)),
            Money::from_major(40),
            NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
        ),
        DebtRecord::new(
            "car finance",
            Money::from_major(4_400),
            Rate::from_percentage(dec!(11.9)),
            Money::from_major(180),
        ),
    ];

    let ordered = order_debts(&debts);

    for debt in &ordered {
        let tier = if debt.is_ccj { "CCJ" } else { "snowball" };
        println!(
            "#{} [{}] {} balance {}",
            debt.snowball_position,
            tier,
            debt.name,
            debt.balance.to_currency_string(),
        );
    }
}
