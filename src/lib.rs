pub mod calendar;
pub mod config;
pub mod decimal;
pub mod errors;
pub mod interest;
pub mod snowball;
pub mod types;

// re-export key types
pub use config::{ProjectionConfig, DEFAULT_MAX_PROJECTION_MONTHS};
pub use decimal::{Money, Rate};
pub use errors::{Result, SnowballError};
pub use interest::{daily_charge, monthly_charge, months_to_clear};
pub use snowball::{
    calculate_monthly_payments, calculate_rollover, order_debts, project_debt_free_date,
    DebtFreeProjection, MonthlyPaymentSchedule, MonthlyProjectionEntry, PaymentScheduleEntry,
};
pub use types::{DebtId, DebtRecord, DebtStatus};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
pub use uuid::Uuid;
