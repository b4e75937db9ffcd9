pub mod ordering;
pub mod projection;
pub mod schedule;

pub use ordering::order_debts;
pub use projection::{project_debt_free_date, DebtFreeProjection, MonthlyProjectionEntry};
pub use schedule::{
    calculate_monthly_payments, calculate_rollover, MonthlyPaymentSchedule, PaymentScheduleEntry,
};
