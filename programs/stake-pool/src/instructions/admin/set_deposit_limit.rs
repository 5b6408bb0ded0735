//! Set the per-deposit cap.

use pinocchio::{program_error::ProgramError, pubkey::Pubkey};
use pinocchio_log::log;

use crate::{ShareToken, StakePool, StakePoolError, bail_err, require};

impl<T: ShareToken> StakePool<T> {
    /// Cap single deposits at `max_deposit_amount` (`u64::MAX` for no cap).
    ///
    /// # Errors
    /// `Unauthorized` unless `caller` is the authority, `InvalidAmount` for a
    /// zero cap.
    pub fn set_deposit_limit(
        &mut self,
        caller: &Pubkey,
        max_deposit_amount: u64,
    ) -> Result<(), ProgramError> {
        self.non_reentrant("set_deposit_limit", |pool| {
            if let Err(e) = pool.state.require_authority(caller) {
                bail_err!("set_deposit_limit", e);
            }
            require!(
                max_deposit_amount > 0,
                "set_deposit_limit",
                StakePoolError::InvalidAmount
            );

            pool.state.max_deposit_amount = max_deposit_amount;

            log!("set_deposit_limit: max={}", max_deposit_amount);
            Ok(())
        })
    }
}
