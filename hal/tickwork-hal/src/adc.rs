//! Analog input abstraction
//!
//! One ADC channel bound to one pin. Conversions are blocking and short;
//! callers sample at most once per tick.

/// Errors from an ADC conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdcError {
    /// Conversion did not complete in time
    Timeout,
    /// Converter reported an error flag
    Conversion,
}

/// A single analog input channel
pub trait AdcChannel {
    /// Full-scale raw value (e.g. 4095 for a 12-bit converter)
    fn full_scale(&self) -> u16;

    /// Perform one conversion and return the raw value
    fn read_raw(&mut self) -> Result<u16, AdcError>;
}
