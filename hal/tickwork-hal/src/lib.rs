//! Tickwork Hardware Abstraction Layer
//!
//! This crate defines the small set of hardware traits the runtime needs
//! from a chip HAL. Chip-specific crates (or thin adapters over
//! `embedded-hal`) implement them; the core never touches registers.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Scenes / firmware                      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  tickwork-core (debounce, FSM runtime)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  tickwork-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`adc::AdcChannel`] - One analog input channel

#![no_std]
#![deny(unsafe_code)]

pub mod adc;
pub mod gpio;

// Re-export key traits at crate root for convenience
pub use adc::{AdcChannel, AdcError};
pub use gpio::{InputPin, OutputPin};
