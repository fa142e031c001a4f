//! Segment display drivers

pub mod font;
pub mod mux;

pub use mux::{MuxDisplay, Wiring};
