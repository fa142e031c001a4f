//! Common device lifecycle

use crate::time::Millis;

/// Errors reported by device drivers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DeviceError {
    /// Device did not respond during init
    NotResponding,
    /// Bus or peripheral fault
    Bus,
    /// Requested value is outside the device's range
    OutOfRange,
    /// Underlying output rejected the command
    Output,
}

/// Lifecycle shared by every output device
pub trait Device {
    /// Bring the device into a known, safe state
    ///
    /// Called once by the board during startup. A failure halts the
    /// system before the scheduling loop starts.
    fn init(&mut self) -> Result<(), DeviceError>;

    /// Periodic housekeeping, once per tick before machines run
    ///
    /// Drivers use this for ramps or refresh timing. Default is a no-op.
    fn update(&mut self, _now: Millis) {}
}
