//! Ready-made scenes
//!
//! Each scene is a set of state machines plus the board trait it needs.
//! A concrete board (firmware or test double) implements the trait and
//! [`tickwork_core::scheduler::Board`], then hands both to the scheduler.
//!
//! - [`night_light`]: one button cycles off / automatic / forced on
//! - [`score_board`]: two counters with a shared reset button
//! - [`whack_a_mole`]: two-player 60 s game on servo-driven moles
//! - [`wipers`]: two wiper channels with sweep and spray programs

#![no_std]
#![deny(unsafe_code)]

pub mod night_light;
pub mod score_board;
pub mod whack_a_mole;
pub mod wipers;
