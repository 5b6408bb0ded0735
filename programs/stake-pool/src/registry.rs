//! Validator registry.
//!
//! A deduplicated list of validator identities. Removal swaps the last entry
//! into the vacated slot, so insertion order is not preserved.

use alloc::{collections::BTreeMap, vec::Vec};
use pinocchio::pubkey::Pubkey;

use crate::StakePoolError;

/// Deduplicated validator list with O(log n) membership and removal.
#[derive(Clone, Debug, Default)]
pub struct ValidatorRegistry {
    validators: Vec<Pubkey>,
    /// Position of each validator in `validators`
    index: BTreeMap<Pubkey, usize>,
}

impl ValidatorRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a validator.
    ///
    /// Returns the new validator count.
    ///
    /// # Errors
    /// `AlreadyExists` if the validator is registered.
    pub fn add(&mut self, validator: Pubkey) -> Result<usize, StakePoolError> {
        if self.index.contains_key(&validator) {
            return Err(StakePoolError::AlreadyExists);
        }
        self.index.insert(validator, self.validators.len());
        self.validators.push(validator);
        Ok(self.validators.len())
    }

    /// Unregister a validator.
    ///
    /// Returns the new validator count.
    ///
    /// # Errors
    /// `NotFound` if the validator is not registered.
    pub fn remove(&mut self, validator: &Pubkey) -> Result<usize, StakePoolError> {
        let position = self
            .index
            .remove(validator)
            .ok_or(StakePoolError::NotFound)?;
        self.validators.swap_remove(position);
        if let Some(moved) = self.validators.get(position) {
            self.index.insert(*moved, position);
        }
        Ok(self.validators.len())
    }

    /// Number of registered validators
    pub fn count(&self) -> usize {
        self.validators.len()
    }

    /// Check if a validator is registered
    pub fn contains(&self, validator: &Pubkey) -> bool {
        self.index.contains_key(validator)
    }

    /// Registered validators, in storage order
    pub fn as_slice(&self) -> &[Pubkey] {
        &self.validators
    }
}
