//! Instruction-level helpers.

use pinocchio::{program_error::ProgramError, pubkey::Pubkey};
use stake_pool::{AssetTransfer, Invocation, ShareToken, StakePool, process_instruction};
use stake_pool_interface::ReturnData;

/// Dispatch raw instruction data with attached value.
pub fn send<T: ShareToken, H: AssetTransfer<T>>(
    pool: &mut StakePool<T>,
    host: &mut H,
    caller: &Pubkey,
    value: u64,
    data: &[u8],
) -> Result<Option<ReturnData>, ProgramError> {
    process_instruction(pool, host, Invocation::new(caller, data).with_value(value))
}

/// Dispatch raw instruction data with no attached value.
pub fn call<T: ShareToken, H: AssetTransfer<T>>(
    pool: &mut StakePool<T>,
    host: &mut H,
    caller: &Pubkey,
    data: &[u8],
) -> Result<Option<ReturnData>, ProgramError> {
    send(pool, host, caller, 0, data)
}
