//! Core types for the stake pool interface.

use bytemuck::{Pod, Zeroable};
use pinocchio::pubkey::Pubkey;

/// Referral value meaning "no referral".
pub const NO_REFERRAL: Pubkey = [0u8; 32];

// ============================================================================
// Share Conversion Functions
// ============================================================================

/// Convert a base-asset amount into pool shares.
///
/// Implements `amount × S / P` (floor) where:
/// - S = total_shares
/// - P = total_pooled_asset
///
/// An empty pool (P = 0) mints shares 1:1 with the deposited amount.
///
/// # Example
/// ```
/// use stake_pool_interface::pooled_asset_to_shares;
///
/// // Empty pool bootstraps at 1:1
/// assert_eq!(pooled_asset_to_shares(100, 0, 0), Some(100));
///
/// // 150 asset backing 100 shares: 30 asset buys 20 shares
/// assert_eq!(pooled_asset_to_shares(30, 150, 100), Some(20));
/// ```
///
/// # Returns
/// `None` when the result does not fit in a `u64`
#[inline]
pub fn pooled_asset_to_shares(
    amount: u64,
    total_pooled_asset: u64,
    total_shares: u64,
) -> Option<u64> {
    if total_pooled_asset == 0 {
        return Some(amount);
    }
    let shares = (amount as u128)
        .checked_mul(total_shares as u128)?
        .checked_div(total_pooled_asset as u128)?;
    u64::try_from(shares).ok()
}

/// Convert pool shares into a base-asset amount.
///
/// Implements `shares × P / S` (floor) where:
/// - P = total_pooled_asset
/// - S = total_shares
///
/// With no shares outstanding (S = 0) every share count is worth nothing.
///
/// # Example
/// ```
/// use stake_pool_interface::shares_to_pooled_asset;
///
/// // 100 shares backed by 150 asset
/// assert_eq!(shares_to_pooled_asset(100, 150, 100), Some(150));
///
/// // Floor rounding
/// assert_eq!(shares_to_pooled_asset(1, 150, 100), Some(1));
///
/// assert_eq!(shares_to_pooled_asset(10, 0, 0), Some(0));
/// ```
///
/// # Returns
/// `None` when the result does not fit in a `u64`
#[inline]
pub fn shares_to_pooled_asset(
    shares: u64,
    total_pooled_asset: u64,
    total_shares: u64,
) -> Option<u64> {
    if total_shares == 0 {
        return Some(0);
    }
    let amount = (shares as u128)
        .checked_mul(total_pooled_asset as u128)?
        .checked_div(total_shares as u128)?;
    u64::try_from(amount).ok()
}

// ============================================================================
// Instruction Parameters
// ============================================================================

/// Parse fixed-size instruction parameters.
///
/// The data must be exactly `size_of::<T>()` bytes; trailing bytes are
/// rejected so that malformed instructions never decode silently.
pub fn parse_params<T: Pod>(data: &[u8]) -> Option<T> {
    if data.len() != core::mem::size_of::<T>() {
        return None;
    }
    bytemuck::try_pod_read_unaligned(data).ok()
}

/// Parameters for a deposit.
///
/// The deposited amount is the value attached to the call, not a field here.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct DepositParams {
    /// Referral identity recorded in the `Submitted` event ([`NO_REFERRAL`] for none)
    pub referral: Pubkey,
}

impl DepositParams {
    /// Size in bytes
    pub const SIZE: usize = 32;
}

/// Parameters carrying a single base-asset amount.
///
/// Used by withdraw, inject rewards and set deposit limit.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct AmountParams {
    /// Amount in base-asset units
    pub amount: u64,
}

impl AmountParams {
    /// Size in bytes
    pub const SIZE: usize = 8;
}

/// Parameters naming a validator identity.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct ValidatorParams {
    /// Validator identity
    pub validator: Pubkey,
}

impl ValidatorParams {
    /// Size in bytes
    pub const SIZE: usize = 32;
}

/// Parameters for pausing or resuming the pool.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct SetPoolActiveParams {
    /// Non-zero to accept deposits and withdrawals
    pub is_active: u8,
}

impl SetPoolActiveParams {
    /// Size in bytes
    pub const SIZE: usize = 1;

    /// Returns true if the pool should be active
    #[inline]
    pub fn is_active(&self) -> bool {
        self.is_active != 0
    }
}

/// Parameters for nominating a new pool authority.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct AuthorityParams {
    /// Nominated authority; must call accept to take over
    pub new_authority: Pubkey,
}

impl AuthorityParams {
    /// Size in bytes
    pub const SIZE: usize = 32;
}

/// Return data from value-producing instructions.
///
/// Deposit returns the number of shares minted.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct ReturnData {
    /// Instruction result value
    pub value: u64,
}

impl ReturnData {
    /// Size in bytes
    pub const SIZE: usize = 8;

    /// Serialize to bytes
    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        self.value.to_le_bytes()
    }

    /// Deserialize from bytes
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        parse_params(bytes)
    }
}
