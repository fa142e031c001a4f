//! Analog sensor trait

/// Sensor read failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// Conversion did not complete
    Timeout,
    /// Reading is outside the physically possible range
    OutOfRange,
    /// Converter produced no usable sample
    NoData,
}

/// Sensor producing a normalised 0-100 % value
///
/// A failed read is "no new information this tick": callers keep their
/// previous decision instead of treating it as fatal.
pub trait AnalogSensor {
    fn read_percent(&mut self) -> Result<f32, SensorError>;
}
