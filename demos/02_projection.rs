/// projection - debt-free date under controlled time
use chrono::{TimeZone, Utc};
use debt_snowball::{
    order_debts, project_debt_free_date, DebtRecord, Money, ProjectionConfig, Rate,
    SafeTimeProvider, TimeSource,
};
use rust_decimal_macros::dec;

fn main() {
    println!("=== projection example ===\n");

    // pin today for a reproducible run
    let time = SafeTimeProvider::new(TimeSource::Test(
        Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
    ));

    let ordered = order_debts(&[
        DebtRecord::new(
            "overdraft",
            Money::from_major(380),
            Rate::from_percentage(dec!(39.9)),
            Money::from_major(30),
        ),
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
    ]);

    let projection = project_debt_free_date(
        &ordered,
        Money::from_major(400),
        &time,
        &ProjectionConfig::default(),
    );

    match (projection.debt_free_date, projection.months_to_debt_free) {
        (Some(date), Some(months)) => {
            println!("debt free on {} ({} months)", date, months);
            println!(
                "total interest paid: {}",
                projection.total_interest_charged.to_currency_string()
            );
            println!("total paid: {}", projection.total_paid.to_currency_string());

            for debt in &ordered {
                if let Some(month) = projection.payoff_month(debt.id) {
                    println!("  {} clears in month {}", debt.name, month);
                }
            }

            // boundary serialization: month one as fixed 2dp JSON
            let month_one: Vec<serde_json::Value> = projection.schedule[0]
                .iter()
                .map(|entry| {
                    serde_json::json!({
                        "debt_id": entry.debt_id,
                        "interest": entry.interest_charged.to_currency_string(),
                        "payment": entry.payment_applied.to_currency_string(),
                        "ending_balance": entry.ending_balance.to_currency_string(),
                    })
                })
                .collect();
            println!("\nmonth one:\n{}", serde_json::to_string_pretty(&month_one).unwrap());
        }
        _ => println!("projection infeasible: payment cannot cover the minimums"),
    }
}
