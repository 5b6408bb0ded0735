//! Instruction handlers and dispatch.
//!
//! Each handler is a method on [`StakePool`]; [`process_instruction`] decodes
//! raw instruction data and routes it to the matching method.

mod admin;
mod deposit;
mod inject_rewards;
mod withdraw;

use pinocchio::program_error::ProgramError;
use pinocchio_log::log;
use stake_pool_interface::{
    AmountParams, AuthorityParams, DepositParams, NO_REFERRAL, ReturnData, SetPoolActiveParams,
    StakePoolInstruction, ValidatorParams, parse_instruction, parse_params,
};

use crate::{AssetTransfer, Invocation, ShareToken, StakePool, StakePoolError, bail_err};

fn params<P: bytemuck::Pod>(data: &[u8]) -> Result<P, ProgramError> {
    match parse_params(data) {
        Some(params) => Ok(params),
        None => bail_err!("process_instruction", StakePoolError::InvalidInstructionData),
    }
}

/// Decode and execute one instruction.
///
/// Empty instruction data is a bare value transfer and deposits with no
/// referral. Value may only be attached to payable instructions.
///
/// Returns [`ReturnData`] for instructions that produce a value (deposit
/// returns the shares minted).
///
/// # Errors
/// `InvalidInstructionData` for an unknown discriminator or malformed params,
/// `UnexpectedValue` for value attached to a non-payable instruction, or any
/// error of the routed handler.
pub fn process_instruction<T: ShareToken, H: AssetTransfer<T>>(
    pool: &mut StakePool<T>,
    host: &mut H,
    invocation: Invocation<'_>,
) -> Result<Option<ReturnData>, ProgramError> {
    let Invocation {
        caller,
        value,
        data,
    } = invocation;

    let Some((instruction, rest)) = parse_instruction(data) else {
        bail_err!("process_instruction", StakePoolError::InvalidInstructionData);
    };

    if value > 0 && !instruction.is_payable() {
        bail_err!("process_instruction", StakePoolError::UnexpectedValue);
    }

    match instruction {
        StakePoolInstruction::Deposit => {
            let referral = if data.is_empty() {
                NO_REFERRAL
            } else {
                params::<DepositParams>(rest)?.referral
            };
            let shares = pool.deposit(caller, value, &referral)?;
            return Ok(Some(ReturnData { value: shares }));
        }
        StakePoolInstruction::Withdraw => {
            let AmountParams { amount } = params(rest)?;
            pool.withdraw(host, caller, amount)?;
        }
        StakePoolInstruction::InjectRewards => {
            let AmountParams { amount } = params(rest)?;
            pool.inject_rewards(caller, amount)?;
        }
        StakePoolInstruction::AddValidator => {
            let ValidatorParams { validator } = params(rest)?;
            pool.add_validator(caller, &validator)?;
        }
        StakePoolInstruction::RemoveValidator => {
            let ValidatorParams { validator } = params(rest)?;
            pool.remove_validator(caller, &validator)?;
        }
        StakePoolInstruction::SetPoolActive => {
            let args: SetPoolActiveParams = params(rest)?;
            pool.set_pool_active(caller, args.is_active())?;
        }
        StakePoolInstruction::SetDepositLimit => {
            let AmountParams { amount } = params(rest)?;
            pool.set_deposit_limit(caller, amount)?;
        }
        StakePoolInstruction::TransferAuthority => {
            let AuthorityParams { new_authority } = params(rest)?;
            pool.transfer_authority(caller, &new_authority)?;
        }
        StakePoolInstruction::AcceptAuthority => {
            if !rest.is_empty() {
                bail_err!("process_instruction", StakePoolError::InvalidInstructionData);
            }
            pool.accept_authority(caller)?;
        }
    }

    log!("process_instruction: success");
    Ok(None)
}
