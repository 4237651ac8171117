//! Configuration types for shuffling

use crate::error::{Result, ShuffleError};
use serde::{Deserialize, Serialize};

/// Default number of pool positions processed between cooperative yields
pub const DEFAULT_YIELD_BATCH: usize = 2_000;

/// Configuration for the cooperative shuffle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShuffleConfig {
    /// Yield to the scheduler whenever the pool cursor is a multiple of this
    /// value (default: 2000)
    pub yield_batch: usize,
}

impl ShuffleConfig {
    /// Config with a custom yield batch
    pub fn with_yield_batch(yield_batch: usize) -> Self {
        Self { yield_batch }
    }

    /// Reject configurations the cooperative shuffle cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.yield_batch == 0 {
            return Err(ShuffleError::InvalidConfig(
                "yield_batch must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ShuffleConfig {
    fn default() -> Self {
        Self {
            yield_batch: DEFAULT_YIELD_BATCH,
        }
    }
}
