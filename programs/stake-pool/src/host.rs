//! Host environment seam.
//!
//! The host owns the base asset. It attaches value to deposits before calling
//! in, and releases value on withdrawal through [`AssetTransfer`].

use pinocchio::{ProgramResult, pubkey::Pubkey};

use crate::{ShareMint, ShareToken, StakePool};

/// Outbound base-asset transfer performed by the host.
///
/// The pool calls [`AssetTransfer::transfer`] as the last step of a
/// withdrawal, after its own state is committed, and passes itself along.
/// Implementations may read the pool or attempt to call back in; mutating
/// calls fail with `ReentrantCall` until the withdrawal returns. Any error
/// rolls the withdrawal back.
pub trait AssetTransfer<T: ShareToken = ShareMint> {
    /// Send `amount` of base asset to `recipient`.
    fn transfer(
        &mut self,
        pool: &mut StakePool<T>,
        recipient: &Pubkey,
        amount: u64,
    ) -> ProgramResult;
}

/// Caller context for one instruction.
#[derive(Clone, Copy, Debug)]
pub struct Invocation<'a> {
    /// Caller identity
    pub caller: &'a Pubkey,
    /// Base-asset value attached to the call
    pub value: u64,
    /// Instruction data
    pub data: &'a [u8],
}

impl<'a> Invocation<'a> {
    /// Invocation with no attached value.
    pub fn new(caller: &'a Pubkey, data: &'a [u8]) -> Self {
        Self {
            caller,
            value: 0,
            data,
        }
    }

    /// Attach base-asset value.
    pub fn with_value(mut self, value: u64) -> Self {
        self.value = value;
        self
    }
}
