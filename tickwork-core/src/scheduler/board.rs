//! Board boundary: everything the machines share

use crate::error::DeviceFault;
use crate::time::Millis;

/// The shared hardware a scheduler drives
///
/// A board owns the debounced inputs and output devices. Machines borrow
/// it mutably for the duration of their own step only, so there is never
/// more than one borrower at a time and no locking is needed.
pub trait Board {
    /// Initialise every device; called once by [`Scheduler::start`](super::Scheduler::start)
    fn init_devices(&mut self) -> Result<(), DeviceFault> {
        Ok(())
    }

    /// Refresh every debounced input with the tick timestamp
    fn refresh_inputs(&mut self, now: Millis);

    /// Periodic device housekeeping (ramps, display refresh)
    fn update_devices(&mut self, _now: Millis) {}
}
