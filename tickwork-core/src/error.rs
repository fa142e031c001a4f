//! Startup and configuration errors
//!
//! Everything in here is fatal: it is detected before the scheduling loop
//! starts and the board halts with a visible diagnostic. Runtime
//! conditions (input noise, a waiting machine, a failed sensor read) are
//! not errors and never surface here.

use crate::traits::DeviceError;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// A state identifier has no registered handler
    UnregisteredState {
        machine: &'static str,
        state: &'static str,
    },
    /// A handler was registered twice for the same state
    DuplicateState {
        machine: &'static str,
        state: &'static str,
    },
    /// State table capacity exceeded
    TooManyStates { machine: &'static str },
    /// Input bank capacity exceeded
    TooManyInputs,
    /// Unknown `[section]` in config text
    UnknownSection,
    /// Unknown key inside a known section
    UnknownKey,
    /// Value could not be parsed or is out of range
    InvalidValue,
    /// Line is neither a section, a key/value pair nor a comment
    Malformed,
    /// Binary config blob could not be encoded or decoded
    Encoding,
}

/// Reasons [`Scheduler::start`](crate::scheduler::Scheduler::start) refuses to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StartupError {
    /// A machine or the runtime configuration is invalid
    Config(ConfigError),
    /// A device failed its `init()`
    Device {
        device: &'static str,
        error: DeviceError,
    },
}

impl From<ConfigError> for StartupError {
    fn from(err: ConfigError) -> Self {
        StartupError::Config(err)
    }
}

/// A named device failure reported by a board during init
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceFault {
    pub device: &'static str,
    pub error: DeviceError,
}

impl DeviceFault {
    pub const fn new(device: &'static str, error: DeviceError) -> Self {
        Self { device, error }
    }
}

impl From<DeviceFault> for StartupError {
    fn from(fault: DeviceFault) -> Self {
        StartupError::Device {
            device: fault.device,
            error: fault.error,
        }
    }
}
