/// quick start - order debts and allocate one month's disposable income
use debt_snowball::{
    calculate_monthly_payments, order_debts, DebtRecord, Money, Rate,
};
use rust_decimal_macros::dec;

fn main() {
    // three household debts, as the validation layer would hand them over
    let debts = vec![
        DebtRecord::new(
            "credit card",
            Money::from_major(743),
            Rate::from_percentage(dec!(19.9)),
            Money::from_major(25),
        ),
        DebtRecord::new(
            "personal loan",
            Money::from_major(5_200),
            Rate::from_percentage(dec!(7.5)),
            Money::from_major(120),
        ),
        DebtRecord::new(
            "overdraft",
            Money::from_major(380),
            Rate::from_percentage(dec!(39.9)),
            Money::from_major(30),
        ),
    ];

    // smallest balance first; the overdraft becomes the focused debt
    let ordered = order_debts(&debts);
    for debt in &ordered {
        println!("#{} {} ({})", debt.snowball_position, debt.name, debt.balance.to_currency_string());
    }

    // allocate a month of disposable income
    let schedule = calculate_monthly_payments(&ordered, Money::from_major(400));
    println!("\nmonthly allocation (total {}):", schedule.total_monthly_payment.to_currency_string());
    for entry in &schedule.entries {
        println!(
            "  position {}: pays {} (minimum {})",
            entry.snowball_position,
            entry.monthly_payment.to_currency_string(),
            entry.minimum_payment.to_currency_string(),
        );
    }
}
