use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::decimal::{Money, Rate};
use crate::errors::{Result, SnowballError};

/// unique identifier for a debt within an organization
pub type DebtId = Uuid;

/// debt status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DebtStatus {
    /// debt carries a balance and participates in ordering and projection
    Active,
    /// cleared; the engine never receives these
    Paid,
}

/// A single debt as supplied by the caller.
///
/// Immutable per engine call. The caller's validation layer guarantees that a
/// CCJ debt carries a deadline; the engine documents and debug-asserts that
/// invariant rather than re-validating it on the hot path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtRecord {
    pub id: DebtId,
    pub name: String,
    pub balance: Money,
    pub annual_rate: Rate,
    pub minimum_payment: Money,
    pub is_ccj: bool,
    pub ccj_deadline: Option<NaiveDate>,
    pub status: DebtStatus,
    /// 1-based rank assigned by ordering; 0 until ordered
    pub snowball_position: u32,
}

impl DebtRecord {
    /// create a non-CCJ debt
    pub fn new(name: impl Into<String>, balance: Money, annual_rate: Rate, minimum_payment: Money) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            balance,
            annual_rate,
            minimum_payment,
            is_ccj: false,
            ccj_deadline: None,
            status: DebtStatus::Active,
            snowball_position: 0,
        }
    }

    /// create a CCJ debt with its compliance deadline
    pub fn new_ccj(
        name: impl Into<String>,
        balance: Money,
        annual_rate: Rate,
        minimum_payment: Money,
        deadline: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            balance,
            annual_rate,
            minimum_payment,
            is_ccj: true,
            ccj_deadline: Some(deadline),
            status: DebtStatus::Active,
            snowball_position: 0,
        }
    }

    /// Explicit precondition check for callers that want a typed error instead
    /// of relying on upstream validation.
    pub fn validate(&self) -> Result<()> {
        if self.is_ccj && self.ccj_deadline.is_none() {
            return Err(SnowballError::MissingCcjDeadline { debt_id: self.id });
        }
        if self.balance.is_negative() {
            return Err(SnowballError::NegativeAmount {
                field: "balance",
                amount: self.balance,
            });
        }
        if self.minimum_payment.is_negative() {
            return Err(SnowballError::NegativeAmount {
                field: "minimum_payment",
                amount: self.minimum_payment,
            });
        }
        Ok(())
    }

    /// check if this debt still carries a balance
    pub fn is_active(&self) -> bool {
        self.status == DebtStatus::Active
    }
}
