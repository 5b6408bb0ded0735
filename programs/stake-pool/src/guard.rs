//! Re-entrancy guard.
//!
//! Withdrawals hand `&mut StakePool` to host code for the asset transfer, so
//! that code can call straight back into the pool. Every mutating entry point
//! runs inside [`StakePool::non_reentrant`]; a call that arrives while the
//! lock is held fails with `ReentrantCall` and changes nothing.

use pinocchio::program_error::ProgramError;
use pinocchio_log::log;

use crate::{ShareToken, StakePool, StakePoolError};

impl<T: ShareToken> StakePool<T> {
    /// Run `f` holding the pool lock.
    ///
    /// The lock is released on every exit path of `f`, including errors.
    pub(crate) fn non_reentrant<R>(
        &mut self,
        op: &str,
        f: impl FnOnce(&mut Self) -> Result<R, ProgramError>,
    ) -> Result<R, ProgramError> {
        if self.state.is_locked() {
            log!("{}: {}", op, StakePoolError::ReentrantCall.name());
            return Err(StakePoolError::ReentrantCall.into());
        }

        self.state.locked = 1;
        let result = f(self);
        self.state.locked = 0;
        result
    }
}
