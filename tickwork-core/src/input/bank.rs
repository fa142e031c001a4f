//! Ordered collection of debounced inputs
//!
//! Boards keep their buttons in a bank so the whole set can be refreshed
//! in one call, in a fixed order, at the start of every tick.

use core::ops::{Index, IndexMut};

use heapless::Vec;
use tickwork_hal::InputPin;

use super::debounce::DebouncedInput;
use crate::error::ConfigError;
use crate::time::Millis;

/// Handle to an input inside an [`InputBank`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputId(u8);

impl InputId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Bounded, ordered set of debounced inputs sharing one pin type
#[derive(Debug)]
pub struct InputBank<P, const N: usize> {
    inputs: Vec<DebouncedInput<P>, N>,
}

impl<P: InputPin, const N: usize> InputBank<P, N> {
    pub const fn new() -> Self {
        Self { inputs: Vec::new() }
    }

    /// Register an input; refresh order is registration order
    pub fn add(&mut self, input: DebouncedInput<P>) -> Result<InputId, ConfigError> {
        let id = u8::try_from(self.inputs.len()).map_err(|_| ConfigError::TooManyInputs)?;
        self.inputs
            .push(input)
            .map_err(|_| ConfigError::TooManyInputs)?;
        Ok(InputId(id))
    }

    /// Refresh every input with the same timestamp
    pub fn refresh_all(&mut self, now: Millis) {
        for input in self.inputs.iter_mut() {
            input.refresh(now);
        }
    }

    pub fn get(&self, id: InputId) -> Option<&DebouncedInput<P>> {
        self.inputs.get(id.index())
    }

    pub fn get_mut(&mut self, id: InputId) -> Option<&mut DebouncedInput<P>> {
        self.inputs.get_mut(id.index())
    }

    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DebouncedInput<P>> {
        self.inputs.iter()
    }
}

impl<P: InputPin, const N: usize> Default for InputBank<P, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P, const N: usize> Index<InputId> for InputBank<P, N> {
    type Output = DebouncedInput<P>;

    fn index(&self, id: InputId) -> &Self::Output {
        &self.inputs[id.index()]
    }
}

impl<P, const N: usize> IndexMut<InputId> for InputBank<P, N> {
    fn index_mut(&mut self, id: InputId) -> &mut Self::Output {
        &mut self.inputs[id.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    #[test]
    fn test_add_returns_sequential_ids() {
        let a = Cell::new(false);
        let b = Cell::new(false);
        let mut bank: InputBank<&Cell<bool>, 4> = InputBank::new();

        let id_a = bank.add(DebouncedInput::with_defaults(&a)).unwrap();
        let id_b = bank.add(DebouncedInput::with_defaults(&b)).unwrap();

        assert_eq!(id_a.index(), 0);
        assert_eq!(id_b.index(), 1);
        assert_eq!(bank.len(), 2);
    }

    #[test]
    fn test_capacity_overflow() {
        let a = Cell::new(false);
        let mut bank: InputBank<&Cell<bool>, 1> = InputBank::new();

        assert!(bank.add(DebouncedInput::with_defaults(&a)).is_ok());
        assert_eq!(
            bank.add(DebouncedInput::with_defaults(&a)),
            Err(ConfigError::TooManyInputs)
        );
    }

    #[test]
    fn test_refresh_all_updates_every_input() {
        let a = Cell::new(true);
        let b = Cell::new(false);
        let mut bank: InputBank<&Cell<bool>, 4> = InputBank::new();
        let id_a = bank.add(DebouncedInput::with_defaults(&a)).unwrap();
        let id_b = bank.add(DebouncedInput::with_defaults(&b)).unwrap();

        bank.refresh_all(0);
        bank.refresh_all(30);

        assert!(bank[id_a].is_pressed());
        assert!(bank[id_b].is_released());
        assert!(bank.get(id_b).is_some());
    }
}
