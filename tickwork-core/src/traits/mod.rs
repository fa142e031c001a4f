//! Device capability traits
//!
//! These traits are the only way state functions reach hardware. There is
//! one trait per device category; concrete drivers implement them and the
//! board hands out references through its own accessor trait.

pub mod device;
pub mod display;
pub mod lamp;
pub mod motor;
pub mod sensor;
pub mod servo;

pub use device::{Device, DeviceError};
pub use display::SegmentDisplay;
pub use lamp::Dimmable;
pub use motor::{DcMotor, Direction};
pub use sensor::{AnalogSensor, SensorError};
pub use servo::ServoBank;
