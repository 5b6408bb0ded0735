//! Share token seam.
//!
//! The pool records shares itself and mirrors every change into a share
//! token ledger: deposits mint exactly the shares credited and withdrawals
//! burn exactly the shares debited.

use alloc::collections::BTreeMap;
use pinocchio::{program_error::ProgramError, pubkey::Pubkey};

use crate::StakePoolError;

/// Fungible token ledger the pool mints and burns share units on.
pub trait ShareToken {
    /// Credit `units` to `to`.
    ///
    /// # Errors
    /// Fails without changing any balance.
    fn mint(&mut self, to: &Pubkey, units: u64) -> Result<(), ProgramError>;

    /// Debit `units` from `from`.
    ///
    /// # Errors
    /// `InsufficientShareUnits` if `from` holds fewer than `units`.
    fn burn(&mut self, from: &Pubkey, units: u64) -> Result<(), ProgramError>;

    /// Units held by `owner`
    fn units_of(&self, owner: &Pubkey) -> u64;

    /// Units in circulation
    fn total_units(&self) -> u64;
}

/// In-memory share token.
#[derive(Clone, Debug, Default)]
pub struct ShareMint {
    balances: BTreeMap<Pubkey, u64>,
    supply: u64,
}

impl ShareMint {
    /// Create an empty mint.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ShareToken for ShareMint {
    fn mint(&mut self, to: &Pubkey, units: u64) -> Result<(), ProgramError> {
        let supply = self
            .supply
            .checked_add(units)
            .ok_or(StakePoolError::ArithmeticOverflow)?;
        let balance = self.balances.entry(*to).or_default();
        *balance = balance
            .checked_add(units)
            .ok_or(StakePoolError::ArithmeticOverflow)?;
        self.supply = supply;
        Ok(())
    }

    fn burn(&mut self, from: &Pubkey, units: u64) -> Result<(), ProgramError> {
        let remaining = self
            .units_of(from)
            .checked_sub(units)
            .ok_or(StakePoolError::InsufficientShareUnits)?;
        let supply = self
            .supply
            .checked_sub(units)
            .ok_or(StakePoolError::ArithmeticOverflow)?;
        if let Some(balance) = self.balances.get_mut(from) {
            *balance = remaining;
        }
        self.supply = supply;
        Ok(())
    }

    fn units_of(&self, owner: &Pubkey) -> u64 {
        self.balances.get(owner).copied().unwrap_or(0)
    }

    fn total_units(&self) -> u64 {
        self.supply
    }
}
