//! Ordered machine collections
//!
//! The scheduler is generic over a [`MachineSet`] so machines keep their
//! concrete types (and stay inspectable) while being stepped in a fixed
//! order. Tuples step left to right; arrays step by index.

use crate::error::ConfigError;
use crate::machine::Machine;
use crate::time::Millis;

/// A fixed, ordered set of machines sharing one board
pub trait MachineSet<B> {
    /// Validate every machine, stopping at the first error
    fn validate(&self) -> Result<(), ConfigError>;

    /// Step every machine once, in registration order
    fn step_all(&mut self, board: &mut B, now: Millis);

    /// Number of machines
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Visit machines in registration order
    fn for_each(&self, f: &mut dyn FnMut(&dyn Machine<B>));
}

impl<B, M: Machine<B> + ?Sized> Machine<B> for &mut M {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn state_name(&self) -> &'static str {
        (**self).state_name()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        (**self).validate()
    }

    fn step(&mut self, board: &mut B, now: Millis) {
        (**self).step(board, now)
    }
}

macro_rules! impl_machine_set {
    ($(($m:ident, $idx:tt)),+) => {
        impl<B, $($m: Machine<B>),+> MachineSet<B> for ($($m,)+) {
            fn validate(&self) -> Result<(), ConfigError> {
                $( self.$idx.validate()?; )+
                Ok(())
            }

            fn step_all(&mut self, board: &mut B, now: Millis) {
                $( self.$idx.step(board, now); )+
            }

            fn len(&self) -> usize {
                [$(stringify!($m)),+].len()
            }

            fn for_each(&self, f: &mut dyn FnMut(&dyn Machine<B>)) {
                $( f(&self.$idx); )+
            }
        }
    };
}

impl_machine_set!((M0, 0));
impl_machine_set!((M0, 0), (M1, 1));
impl_machine_set!((M0, 0), (M1, 1), (M2, 2));
impl_machine_set!((M0, 0), (M1, 1), (M2, 2), (M3, 3));
impl_machine_set!((M0, 0), (M1, 1), (M2, 2), (M3, 3), (M4, 4));
impl_machine_set!((M0, 0), (M1, 1), (M2, 2), (M3, 3), (M4, 4), (M5, 5));
impl_machine_set!((M0, 0), (M1, 1), (M2, 2), (M3, 3), (M4, 4), (M5, 5), (M6, 6));
impl_machine_set!((M0, 0), (M1, 1), (M2, 2), (M3, 3), (M4, 4), (M5, 5), (M6, 6), (M7, 7));

impl<B, M: Machine<B>, const N: usize> MachineSet<B> for [M; N] {
    fn validate(&self) -> Result<(), ConfigError> {
        self.iter().try_for_each(|m| m.validate())
    }

    fn step_all(&mut self, board: &mut B, now: Millis) {
        for machine in self.iter_mut() {
            machine.step(board, now);
        }
    }

    fn len(&self) -> usize {
        N
    }

    fn for_each(&self, f: &mut dyn FnMut(&dyn Machine<B>)) {
        for machine in self.iter() {
            f(machine);
        }
    }
}
