//! Sensor drivers

pub mod light;

pub use light::LightSensor;
