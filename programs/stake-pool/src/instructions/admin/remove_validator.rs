//! Unregister a validator.

use pinocchio::{program_error::ProgramError, pubkey::Pubkey};
use pinocchio_log::log;

use crate::{ShareToken, StakePool, bail_err, events::ValidatorRemovedEvent};

impl<T: ShareToken> StakePool<T> {
    /// Unregister `validator`.
    ///
    /// The last registered validator takes the removed one's slot.
    ///
    /// # Errors
    /// `Unauthorized` unless `caller` is the authority, `NotFound` if the
    /// validator is not registered.
    pub fn remove_validator(
        &mut self,
        caller: &Pubkey,
        validator: &Pubkey,
    ) -> Result<(), ProgramError> {
        self.non_reentrant("remove_validator", |pool| {
            if let Err(e) = pool.state.require_authority(caller) {
                bail_err!("remove_validator", e);
            }

            let count = match pool.validators.remove(validator) {
                Ok(count) => count,
                Err(e) => bail_err!("remove_validator", e),
            };

            pool.events.emit(&ValidatorRemovedEvent {
                validator: *validator,
                validator_count: count as u64,
            });

            log!("remove_validator: count={}", count);
            Ok(())
        })
    }
}
