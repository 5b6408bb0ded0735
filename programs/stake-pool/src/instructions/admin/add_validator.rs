//! Register a validator.

use pinocchio::{program_error::ProgramError, pubkey::Pubkey};
use pinocchio_log::log;

use crate::{ShareToken, StakePool, bail_err, events::ValidatorAddedEvent};

impl<T: ShareToken> StakePool<T> {
    /// Register `validator`.
    ///
    /// # Errors
    /// `Unauthorized` unless `caller` is the authority, `AlreadyExists` if the
    /// validator is registered.
    pub fn add_validator(&mut self, caller: &Pubkey, validator: &Pubkey) -> Result<(), ProgramError> {
        self.non_reentrant("add_validator", |pool| {
            if let Err(e) = pool.state.require_authority(caller) {
                bail_err!("add_validator", e);
            }

            let count = match pool.validators.add(*validator) {
                Ok(count) => count,
                Err(e) => bail_err!("add_validator", e),
            };

            pool.events.emit(&ValidatorAddedEvent {
                validator: *validator,
                validator_count: count as u64,
            });

            log!("add_validator: count={}", count);
            Ok(())
        })
    }
}
