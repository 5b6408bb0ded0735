//! Set pool active state.

use pinocchio::{program_error::ProgramError, pubkey::Pubkey};
use pinocchio_log::log;

use crate::{ShareToken, StakePool, bail_err, events::PoolActiveChangedEvent};

impl<T: ShareToken> StakePool<T> {
    /// Pause or resume the pool.
    ///
    /// When inactive, deposits and withdrawals are blocked. Reward injection
    /// and administration keep working.
    ///
    /// # Errors
    /// `Unauthorized` unless `caller` is the authority.
    pub fn set_pool_active(&mut self, caller: &Pubkey, is_active: bool) -> Result<(), ProgramError> {
        self.non_reentrant("set_pool_active", |pool| {
            if let Err(e) = pool.state.require_authority(caller) {
                bail_err!("set_pool_active", e);
            }

            pool.state.is_active = is_active as u8;

            pool.events.emit(&PoolActiveChangedEvent {
                authority: *caller,
                is_active: is_active as u8,
                _padding: [0; 7],
            });

            log!("set_pool_active: success");
            Ok(())
        })
    }
}
