//! `AcceptAuthority` instruction handler.
//!
//! Completes the two-step authority transfer by accepting the pending authority role.
//! Must be called by the `pending_authority` address.

use pinocchio::{program_error::ProgramError, pubkey::Pubkey};
use pinocchio_log::log;

use crate::{
    ShareToken, StakePool, authority::accept_authority_impl, bail_err,
    events::AuthorityTransferredEvent,
};

impl<T: ShareToken> StakePool<T> {
    /// Accept a pending authority nomination.
    ///
    /// # Errors
    /// `NoPendingAuthority` if nobody is nominated, `Unauthorized` unless
    /// `caller` is the nominee.
    pub fn accept_authority(&mut self, caller: &Pubkey) -> Result<(), ProgramError> {
        self.non_reentrant("accept_authority", |pool| {
            let previous_authority = match accept_authority_impl(&mut pool.state, caller) {
                Ok(previous) => previous,
                Err(e) => bail_err!("accept_authority", e),
            };

            pool.events.emit(&AuthorityTransferredEvent {
                previous_authority,
                new_authority: *caller,
            });

            log!("accept_authority: authority transferred");
            Ok(())
        })
    }
}
