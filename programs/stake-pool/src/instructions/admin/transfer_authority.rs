//! `TransferAuthority` instruction handler.
//!
//! Initiates a two-step authority transfer by setting `pending_authority`.
//! The new authority must call `accept_authority` to complete the transfer.

use pinocchio::{program_error::ProgramError, pubkey::Pubkey};
use pinocchio_log::log;

use crate::{ShareToken, StakePool, authority::transfer_authority_impl, bail_err};

impl<T: ShareToken> StakePool<T> {
    /// Nominate `new_authority`.
    ///
    /// # Errors
    /// `Unauthorized` unless `caller` is the authority.
    pub fn transfer_authority(
        &mut self,
        caller: &Pubkey,
        new_authority: &Pubkey,
    ) -> Result<(), ProgramError> {
        self.non_reentrant("transfer_authority", |pool| {
            if let Err(e) = transfer_authority_impl(&mut pool.state, caller, new_authority) {
                bail_err!("transfer_authority", e);
            }
            log!("transfer_authority: pending authority set");
            Ok(())
        })
    }
}
