use thiserror::Error;

use crate::decimal::Money;
use crate::types::DebtId;

#[derive(Error, Debug)]
pub enum SnowballError {
    #[error("ccj debt missing deadline: {debt_id}")]
    MissingCcjDeadline {
        debt_id: DebtId,
    },

    #[error("negative amount: {amount} for {field}")]
    NegativeAmount {
        field: &'static str,
        amount: Money,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, SnowballError>;
