//! Shape identifiers.
//!
//! Identifiers are the smallest non-negative integers not in use, so a
//! released identifier is handed out again before any larger one.

use drawkit_core::ListError;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default)]
pub struct IdAllocator {
    in_use: BTreeSet<usize>,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserves the smallest free identifier
    pub fn allocate(&mut self) -> usize {
        let mut candidate = 0;
        for &id in &self.in_use {
            if id != candidate {
                break;
            }
            candidate += 1;
        }
        self.in_use.insert(candidate);
        candidate
    }

    pub fn release(&mut self, id: usize) -> Result<(), ListError> {
        if self.in_use.remove(&id) {
            Ok(())
        } else {
            Err(ListError::UnknownId { id })
        }
    }

    pub fn is_allocated(&self, id: usize) -> bool {
        self.in_use.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.in_use.len()
    }

    pub fn is_empty(&self) -> bool {
        self.in_use.is_empty()
    }

    pub fn clear(&mut self) {
        self.in_use.clear();
    }
}
