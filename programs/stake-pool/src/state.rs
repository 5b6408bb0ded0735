//! Stake pool state records.

use bytemuck::{Pod, Zeroable};
use pinocchio::pubkey::Pubkey;
use stake_pool_interface::{pooled_asset_to_shares, shares_to_pooled_asset};

use crate::StakePoolError;

/// Parameters for creating a pool.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable)]
pub struct InitPoolParams {
    /// Authority that can inject rewards and manage the pool
    pub authority: Pubkey,
    /// Maximum deposit amount per call (`u64::MAX` for unlimited)
    pub max_deposit_amount: u64,
}

impl InitPoolParams {
    /// Parameters for an active pool with no deposit cap.
    pub fn new(authority: Pubkey) -> Self {
        Self {
            authority,
            max_deposit_amount: u64::MAX,
        }
    }
}

/// Aggregate pool state.
///
/// # Share Accounting
///
/// `total_pooled_asset` is the asset backing all outstanding shares and
/// `total_shares` is their count. The exchange rate is implicit:
/// ```text
/// rate = total_pooled_asset / total_shares
/// ```
/// Both totals are zero, or both are strictly positive. Deposits grow both
/// at the current rate, withdrawals shrink both, and reward injection grows
/// only `total_pooled_asset`, which raises the value of every share.
///
/// Holder balances are never stored; they are derived from a holder's shares
/// through [`PoolState::shares_to_asset`].
///
/// # Lifetime Statistics
///
/// `total_deposited`, `total_withdrawn` and `total_rewards_injected` only
/// ever grow. At every point:
/// ```text
/// total_pooled_asset = total_deposited + total_rewards_injected - total_withdrawn
/// ```
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable)]
pub struct PoolState {
    /// Authority that can inject rewards and manage the pool
    pub authority: Pubkey,
    /// Pending authority for two-step transfer.
    /// Set by `transfer_authority`, must call `accept_authority` to complete.
    pub pending_authority: Pubkey,
    /// Cumulative total deposits (in base-asset units)
    pub total_deposited: u128,
    /// Cumulative total withdrawals (in base-asset units)
    pub total_withdrawn: u128,
    /// Cumulative rewards injected (in base-asset units)
    pub total_rewards_injected: u128,
    /// Asset backing all outstanding shares
    pub total_pooled_asset: u64,
    /// Outstanding shares
    pub total_shares: u64,
    /// Maximum deposit amount per call
    pub max_deposit_amount: u64,
    /// Number of deposits
    pub deposit_count: u64,
    /// Number of withdrawals
    pub withdrawal_count: u64,
    /// Whether deposits and withdrawals are accepted
    pub is_active: u8,
    /// Set while a mutating call is in flight
    pub locked: u8,
    /// Padding for struct alignment
    pub _padding: [u8; 6],
}

impl PoolState {
    /// Record size
    pub const SIZE: usize = core::mem::size_of::<Self>();

    /// Create an empty, active pool.
    pub fn new(params: &InitPoolParams) -> Self {
        Self {
            authority: params.authority,
            max_deposit_amount: params.max_deposit_amount,
            is_active: 1,
            ..Self::zeroed()
        }
    }

    /// Check if the pool is active
    pub fn is_active(&self) -> bool {
        self.is_active != 0
    }

    /// Check if a mutating call is in flight
    pub fn is_locked(&self) -> bool {
        self.locked != 0
    }

    /// Check if pool is active, returning error if paused.
    #[inline]
    pub fn require_active(&self) -> Result<(), StakePoolError> {
        if !self.is_active() {
            return Err(StakePoolError::PoolPaused);
        }
        Ok(())
    }

    /// Check if signer matches authority, returning error if unauthorized.
    #[inline]
    pub fn require_authority(&self, signer: &Pubkey) -> Result<(), StakePoolError> {
        if self.authority != *signer {
            return Err(StakePoolError::Unauthorized);
        }
        Ok(())
    }

    /// Shares that `amount` of base asset buys at the current rate.
    ///
    /// An empty pool converts 1:1.
    #[inline]
    pub fn asset_to_shares(&self, amount: u64) -> Result<u64, StakePoolError> {
        pooled_asset_to_shares(amount, self.total_pooled_asset, self.total_shares)
            .ok_or(StakePoolError::ArithmeticOverflow)
    }

    /// Base asset that `shares` redeem for at the current rate.
    #[inline]
    pub fn shares_to_asset(&self, shares: u64) -> Result<u64, StakePoolError> {
        shares_to_pooled_asset(shares, self.total_pooled_asset, self.total_shares)
            .ok_or(StakePoolError::ArithmeticOverflow)
    }
}

/// Per-holder share record.
///
/// A holder with no record owns zero shares. Records are kept once created,
/// even after the holder withdraws everything.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable)]
pub struct HolderAccount {
    /// Holder identity
    pub owner: Pubkey,
    /// Shares owned
    pub shares: u64,
}

impl HolderAccount {
    /// Record size
    pub const SIZE: usize = core::mem::size_of::<Self>();

    /// Empty record for `owner`.
    pub fn new(owner: Pubkey) -> Self {
        Self { owner, shares: 0 }
    }
}
