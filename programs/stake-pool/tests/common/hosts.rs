//! Host implementations for withdrawal transfers.

use pinocchio::{ProgramResult, program_error::ProgramError, pubkey::Pubkey};
use stake_pool::{AssetTransfer, ShareToken, StakePool, StakePoolError};

/// Records every transfer and always succeeds.
#[derive(Debug, Default)]
pub struct RecordingVault {
    pub transfers: Vec<(Pubkey, u64)>,
}

impl<T: ShareToken> AssetTransfer<T> for RecordingVault {
    fn transfer(
        &mut self,
        _pool: &mut StakePool<T>,
        recipient: &Pubkey,
        amount: u64,
    ) -> ProgramResult {
        self.transfers.push((*recipient, amount));
        Ok(())
    }
}

/// Rejects every transfer.
#[derive(Debug, Default)]
pub struct FailingVault {
    pub attempts: usize,
}

impl<T: ShareToken> AssetTransfer<T> for FailingVault {
    fn transfer(
        &mut self,
        _pool: &mut StakePool<T>,
        _recipient: &Pubkey,
        _amount: u64,
    ) -> ProgramResult {
        self.attempts += 1;
        Err(ProgramError::InsufficientFunds)
    }
}

/// Callback attempted from inside a withdrawal transfer.
#[derive(Clone, Copy, Debug)]
pub enum Reentry {
    Deposit(u64),
    Withdraw(u64),
    InjectRewards(u64),
    AddValidator(Pubkey),
}

/// Calls back into the pool during the transfer and records what it saw.
#[derive(Debug)]
pub struct ReentrantVault {
    pub reentry: Reentry,
    /// Result of the nested call
    pub nested: Option<Result<(), ProgramError>>,
    /// `(balance_of, total_supply)` observed from inside the transfer
    pub observed: Option<(u64, u64)>,
    /// Whether the outer transfer itself succeeds
    pub succeed: bool,
}

impl ReentrantVault {
    pub fn new(reentry: Reentry) -> Self {
        Self {
            reentry,
            nested: None,
            observed: None,
            succeed: true,
        }
    }

    pub fn failing(reentry: Reentry) -> Self {
        Self {
            succeed: false,
            ..Self::new(reentry)
        }
    }
}

impl<T: ShareToken> AssetTransfer<T> for ReentrantVault {
    fn transfer(
        &mut self,
        pool: &mut StakePool<T>,
        recipient: &Pubkey,
        _amount: u64,
    ) -> ProgramResult {
        self.observed = Some((pool.balance_of(recipient), pool.total_supply()));

        let nested = match self.reentry {
            Reentry::Deposit(amount) => pool.receive(recipient, amount).map(|_| ()),
            Reentry::Withdraw(amount) => {
                let mut inner = RecordingVault::default();
                pool.withdraw(&mut inner, recipient, amount).map(|_| ())
            }
            Reentry::InjectRewards(amount) => {
                let authority = *pool.authority();
                pool.inject_rewards(&authority, amount)
            }
            Reentry::AddValidator(validator) => {
                let authority = *pool.authority();
                pool.add_validator(&authority, &validator)
            }
        };
        self.nested = Some(nested);

        if self.succeed {
            Ok(())
        } else {
            Err(StakePoolError::InsufficientBalance.into())
        }
    }
}
