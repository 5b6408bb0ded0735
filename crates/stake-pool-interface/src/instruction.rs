//! Instruction discriminators and data builders.
//!
//! Instruction data layout: `[discriminator: u8, params: Pod bytes]`.
//! Empty instruction data is a bare value transfer and is treated as a
//! deposit with no referral.

use bytemuck::Pod;
use num_enum::{IntoPrimitive, TryFromPrimitive};
use pinocchio::pubkey::Pubkey;

use crate::{
    AmountParams, AuthorityParams, DepositParams, SetPoolActiveParams, ValidatorParams,
};

/// Stake pool instruction discriminators.
///
/// User instructions live in `0..64`, authority-gated pool management in
/// `64..192`, and authority handover in `192..`.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
pub enum StakePoolInstruction {
    /// Deposit the attached value and mint shares (payable)
    /// Params: [`DepositParams`]
    Deposit = 0,

    /// Burn shares worth `amount` and release the asset to the caller
    /// Params: [`AmountParams`]
    Withdraw = 1,

    /// Add reward asset to the pool without minting shares (authority)
    /// Params: [`AmountParams`]
    InjectRewards = 64,

    /// Register a validator identity (authority)
    /// Params: [`ValidatorParams`]
    AddValidator = 65,

    /// Unregister a validator identity (authority)
    /// Params: [`ValidatorParams`]
    RemoveValidator = 66,

    /// Pause or resume deposits and withdrawals (authority)
    /// Params: [`SetPoolActiveParams`]
    SetPoolActive = 67,

    /// Set the per-deposit cap, `u64::MAX` for unlimited (authority)
    /// Params: [`AmountParams`]
    SetDepositLimit = 68,

    /// Nominate a new authority (authority)
    /// Params: [`AuthorityParams`]
    TransferAuthority = 192,

    /// Accept a pending authority nomination (pending authority)
    /// Params: none
    AcceptAuthority = 193,
}

impl StakePoolInstruction {
    /// Convert to u8 discriminator
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Returns true if the instruction may carry attached value
    pub const fn is_payable(self) -> bool {
        matches!(self, StakePoolInstruction::Deposit)
    }
}

/// Split instruction data into its discriminator and params.
///
/// Empty data decodes as [`StakePoolInstruction::Deposit`] with empty params,
/// which the processor reads as "no referral". Returns `None` for an unknown
/// discriminator.
pub fn parse_instruction(data: &[u8]) -> Option<(StakePoolInstruction, &[u8])> {
    match data.split_first() {
        None => Some((StakePoolInstruction::Deposit, data)),
        Some((disc, rest)) => StakePoolInstruction::try_from(*disc)
            .ok()
            .map(|ix| (ix, rest)),
    }
}

// ============================================================================
// Instruction Data Builders
// ============================================================================

fn encode<const N: usize, T: Pod>(ix: StakePoolInstruction, params: &T) -> [u8; N] {
    let bytes = bytemuck::bytes_of(params);
    debug_assert_eq!(N, 1 + bytes.len());
    let mut data = [0u8; N];
    data[0] = ix.to_u8();
    data[1..].copy_from_slice(bytes);
    data
}

/// Build instruction data for a deposit.
///
/// Layout: [discriminator: u8, params: DepositParams (32 bytes)]
pub fn build_deposit_instruction_data(referral: Pubkey) -> [u8; 33] {
    encode(StakePoolInstruction::Deposit, &DepositParams { referral })
}

/// Build instruction data for a withdrawal.
///
/// Layout: [discriminator: u8, params: AmountParams (8 bytes)]
pub fn build_withdraw_instruction_data(amount: u64) -> [u8; 9] {
    encode(StakePoolInstruction::Withdraw, &AmountParams { amount })
}

/// Build instruction data for a reward injection.
///
/// Layout: [discriminator: u8, params: AmountParams (8 bytes)]
pub fn build_inject_rewards_instruction_data(amount: u64) -> [u8; 9] {
    encode(StakePoolInstruction::InjectRewards, &AmountParams { amount })
}

/// Build instruction data for registering a validator.
pub fn build_add_validator_instruction_data(validator: Pubkey) -> [u8; 33] {
    encode(StakePoolInstruction::AddValidator, &ValidatorParams { validator })
}

/// Build instruction data for unregistering a validator.
pub fn build_remove_validator_instruction_data(validator: Pubkey) -> [u8; 33] {
    encode(StakePoolInstruction::RemoveValidator, &ValidatorParams { validator })
}

/// Build instruction data for pausing or resuming the pool.
pub fn build_set_pool_active_instruction_data(is_active: bool) -> [u8; 2] {
    encode(
        StakePoolInstruction::SetPoolActive,
        &SetPoolActiveParams {
            is_active: is_active as u8,
        },
    )
}

/// Build instruction data for setting the per-deposit cap.
pub fn build_set_deposit_limit_instruction_data(max_deposit_amount: u64) -> [u8; 9] {
    encode(
        StakePoolInstruction::SetDepositLimit,
        &AmountParams {
            amount: max_deposit_amount,
        },
    )
}

/// Build instruction data for nominating a new authority.
pub fn build_transfer_authority_instruction_data(new_authority: Pubkey) -> [u8; 33] {
    encode(
        StakePoolInstruction::TransferAuthority,
        &AuthorityParams { new_authority },
    )
}

/// Build instruction data for accepting a pending authority nomination.
pub fn build_accept_authority_instruction_data() -> [u8; 1] {
    [StakePoolInstruction::AcceptAuthority.to_u8()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_params;

    #[test]
    fn test_empty_data_is_bare_deposit() {
        let (ix, params) = parse_instruction(&[]).unwrap();
        assert_eq!(ix, StakePoolInstruction::Deposit);
        assert!(params.is_empty());
    }

    #[test]
    fn test_unknown_discriminator() {
        assert!(parse_instruction(&[2]).is_none());
        assert!(parse_instruction(&[255, 0, 0]).is_none());
    }

    #[test]
    fn test_only_deposit_is_payable() {
        assert!(StakePoolInstruction::Deposit.is_payable());
        assert!(!StakePoolInstruction::Withdraw.is_payable());
        assert!(!StakePoolInstruction::InjectRewards.is_payable());
        assert!(!StakePoolInstruction::AcceptAuthority.is_payable());
    }

    #[test]
    fn test_deposit_data_layout() {
        let referral = [7u8; 32];
        let data = build_deposit_instruction_data(referral);
        assert_eq!(data[0], 0);
        assert_eq!(&data[1..], &referral);

        let (ix, rest) = parse_instruction(&data).unwrap();
        assert_eq!(ix, StakePoolInstruction::Deposit);
        assert_eq!(
            parse_params::<DepositParams>(rest).unwrap().referral,
            referral
        );
    }

    #[test]
    fn test_amount_data_layout() {
        let data = build_withdraw_instruction_data(0x0102_0304_0506_0708);
        assert_eq!(data[0], StakePoolInstruction::Withdraw.to_u8());
        assert_eq!(&data[1..], &0x0102_0304_0506_0708u64.to_le_bytes());

        let data = build_inject_rewards_instruction_data(50);
        let (ix, rest) = parse_instruction(&data).unwrap();
        assert_eq!(ix, StakePoolInstruction::InjectRewards);
        assert_eq!(parse_params::<AmountParams>(rest).unwrap().amount, 50);
    }

    #[test]
    fn test_admin_data_discriminators() {
        assert_eq!(build_add_validator_instruction_data([1; 32])[0], 65);
        assert_eq!(build_remove_validator_instruction_data([1; 32])[0], 66);
        assert_eq!(build_set_pool_active_instruction_data(false), [67, 0]);
        assert_eq!(build_set_pool_active_instruction_data(true), [67, 1]);
        assert_eq!(build_set_deposit_limit_instruction_data(9)[0], 68);
        assert_eq!(build_transfer_authority_instruction_data([2; 32])[0], 192);
        assert_eq!(build_accept_authority_instruction_data(), [193]);
    }
}
