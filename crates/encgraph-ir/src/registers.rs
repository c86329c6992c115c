//! Per-encode register file.
//!
//! The graph only carries offsets; every concurrent encode owns one
//! `RegisterFile`, so executions never alias each other's state.

use crate::graph::Code;
use crate::slot::SlotOffset;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegisterError {
    #[error("register slot {index} out of bounds (file has {len} slots)")]
    OutOfBounds { index: u32, len: usize },
}

/// Bounds-checked array of 64-bit register cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterFile {
    slots: Vec<u64>,
}

impl RegisterFile {
    /// Zeroed file with `len` slots.
    pub fn new(len: usize) -> Self {
        Self {
            slots: vec![0; len],
        }
    }

    /// Zeroed file large enough to execute `code`.
    pub fn for_code(code: &Code) -> Self {
        Self::new(code.register_file_size())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn load(&self, at: SlotOffset) -> Result<u64, RegisterError> {
        self.slots
            .get(at.index() as usize)
            .copied()
            .ok_or(self.out_of_bounds(at))
    }

    pub fn store(&mut self, at: SlotOffset, value: u64) -> Result<(), RegisterError> {
        let err = self.out_of_bounds(at);
        let cell = self.slots.get_mut(at.index() as usize).ok_or(err)?;
        *cell = value;
        Ok(())
    }

    /// Reset every cell to zero, keeping the size.
    pub fn clear(&mut self) {
        self.slots.fill(0);
    }

    fn out_of_bounds(&self, at: SlotOffset) -> RegisterError {
        RegisterError::OutOfBounds {
            index: at.index(),
            len: self.slots.len(),
        }
    }
}
