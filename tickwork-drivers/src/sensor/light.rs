//! Ambient light sensor on one ADC channel
//!
//! A photoresistor divider read as 0-100 %. With the LDR on the high side
//! the reading rises with light; [`LightSensor::inverted`] handles the
//! opposite wiring.

use tickwork_core::traits::{AnalogSensor, Device, DeviceError, SensorError};
use tickwork_hal::{AdcChannel, AdcError};

pub struct LightSensor<A> {
    adc: A,
    inverted: bool,
    last: Option<f32>,
}

impl<A: AdcChannel> LightSensor<A> {
    pub fn new(adc: A) -> Self {
        Self {
            adc,
            inverted: false,
            last: None,
        }
    }

    /// Reading falls as light increases
    pub fn inverted(adc: A) -> Self {
        Self {
            inverted: true,
            ..Self::new(adc)
        }
    }

    /// Last successful reading
    pub fn last_known(&self) -> Option<f32> {
        self.last
    }

    /// Fresh reading, or the last good one if this conversion failed
    pub fn read_or_last(&mut self) -> Result<f32, SensorError> {
        match self.read_percent() {
            Ok(percent) => Ok(percent),
            Err(err) => self.last.ok_or(err),
        }
    }

    pub fn adc_mut(&mut self) -> &mut A {
        &mut self.adc
    }

    fn convert(&self, raw: u16) -> Result<f32, SensorError> {
        let full_scale = self.adc.full_scale();
        if full_scale == 0 || raw > full_scale {
            return Err(SensorError::OutOfRange);
        }
        let percent = raw as f32 * 100.0 / full_scale as f32;
        Ok(if self.inverted { 100.0 - percent } else { percent })
    }
}

impl<A: AdcChannel> AnalogSensor for LightSensor<A> {
    fn read_percent(&mut self) -> Result<f32, SensorError> {
        let raw = self.adc.read_raw().map_err(|err| match err {
            AdcError::Timeout => SensorError::Timeout,
            AdcError::Conversion => SensorError::NoData,
        })?;
        let percent = self.convert(raw)?;
        self.last = Some(percent);
        Ok(percent)
    }
}

impl<A: AdcChannel> Device for LightSensor<A> {
    /// One trial conversion
    fn init(&mut self) -> Result<(), DeviceError> {
        match self.read_percent() {
            Ok(_) => Ok(()),
            Err(SensorError::OutOfRange) => Err(DeviceError::OutOfRange),
            Err(_) => Err(DeviceError::NotResponding),
        }
    }
}
