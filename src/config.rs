use serde::{Deserialize, Serialize};

use crate::errors::{Result, SnowballError};

/// default safety bound on projection length: 600 months / 50 years
pub const DEFAULT_MAX_PROJECTION_MONTHS: u32 = 600;

/// projection configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionConfig {
    /// hard cap on simulated months; overruns are reported as non-convergence,
    /// never as an error
    pub max_months: u32,
}

impl ProjectionConfig {
    pub fn new(max_months: u32) -> Self {
        Self { max_months }
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_months == 0 {
            return Err(SnowballError::InvalidConfiguration {
                message: "max_months must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            max_months: DEFAULT_MAX_PROJECTION_MONTHS,
        }
    }
}
