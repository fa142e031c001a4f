//! Dimmable on/off outputs (LEDs, lamps, pumps on a PWM pin)

/// Output that is either off or on at a brightness/power percentage
pub trait Dimmable {
    /// Switch on at `percent` (clamped to 0-100)
    fn on(&mut self, percent: u8);

    /// Switch off
    fn off(&mut self);

    /// Current commanded level (0 = off)
    fn level(&self) -> u8;

    fn is_on(&self) -> bool {
        self.level() > 0
    }
}
