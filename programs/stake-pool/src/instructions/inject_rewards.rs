//! Inject rewards instruction handler.
//!
//! Simulated yield: the authority adds base asset to the pool without minting
//! shares, which raises the redemption value of every outstanding share.

use pinocchio::{program_error::ProgramError, pubkey::Pubkey};
use pinocchio_log::log;

use crate::{ShareToken, StakePool, StakePoolError, events::RewardsInjectedEvent, require};

impl<T: ShareToken> StakePool<T> {
    /// Add `amount` of reward asset to the pool.
    ///
    /// # Errors
    /// `ZeroRewards`, `Unauthorized`, `EmptyPool` if no shares are
    /// outstanding, or `ArithmeticOverflow`.
    pub fn inject_rewards(&mut self, caller: &Pubkey, amount: u64) -> Result<(), ProgramError> {
        self.non_reentrant("inject_rewards", |pool| {
            pool.process_inject_rewards(caller, amount)
        })
    }

    fn process_inject_rewards(&mut self, caller: &Pubkey, amount: u64) -> Result<(), ProgramError> {
        require!(amount > 0, "inject_rewards", StakePoolError::ZeroRewards);
        if let Err(e) = self.state.require_authority(caller) {
            crate::bail_err!("inject_rewards", e);
        }

        // Rewards with no holders would leave asset backing zero shares
        require!(
            self.state.total_shares > 0,
            "inject_rewards",
            StakePoolError::EmptyPool
        );

        let total_pooled_asset = self
            .state
            .total_pooled_asset
            .checked_add(amount)
            .ok_or(StakePoolError::ArithmeticOverflow)?;
        let total_rewards_injected = self
            .state
            .total_rewards_injected
            .checked_add(amount as u128)
            .ok_or(StakePoolError::ArithmeticOverflow)?;

        self.state.total_pooled_asset = total_pooled_asset;
        self.state.total_rewards_injected = total_rewards_injected;

        self.events.emit(&RewardsInjectedEvent {
            authority: *caller,
            amount,
            total_pooled_asset,
            total_shares: self.state.total_shares,
        });

        log!("inject_rewards: amount={}", amount);
        Ok(())
    }
}
