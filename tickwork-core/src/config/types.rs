//! Configuration type definitions

use crate::error::ConfigError;
use crate::input::DebounceConfig;
use crate::time::Millis;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Scheduler settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SchedulerConfig {
    /// Period of the status log line (0 = disabled)
    pub status_interval_ms: Millis,
}

/// Complete runtime configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RuntimeConfig {
    pub debounce: DebounceConfig,
    pub scheduler: SchedulerConfig,
}

impl RuntimeConfig {
    pub const fn new() -> Self {
        Self {
            debounce: DebounceConfig {
                settle_ms: crate::input::debounce::DEFAULT_SETTLE_MS,
                release_hold_ms: crate::input::debounce::DEFAULT_RELEASE_HOLD_MS,
            },
            scheduler: SchedulerConfig {
                status_interval_ms: 0,
            },
        }
    }

    /// Reject values that would make inputs unusable
    ///
    /// A zero `release_hold_ms` shrinks the click edge to the single tick
    /// that detected it; a machine that is mid-transition in that tick
    /// misses the click.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.debounce.release_hold_ms == 0 {
            return Err(ConfigError::InvalidValue);
        }
        Ok(())
    }
}
