//! The pool ledger.

use alloc::{collections::BTreeMap, vec::Vec};
use pinocchio::{program_error::ProgramError, pubkey::Pubkey};

use crate::{
    EventLog, HolderAccount, InitPoolParams, PoolState, ShareMint, ShareToken, ValidatorRegistry,
};

/// Pooled-asset ledger.
///
/// Owns the aggregate [`PoolState`], the per-holder share records, the
/// validator registry and the event log, and mirrors share changes into a
/// [`ShareToken`]. Mutating entry points live in [`crate::instructions`];
/// this module holds construction, read-only views and the rollback
/// checkpoint.
#[derive(Clone, Debug)]
pub struct StakePool<T: ShareToken = ShareMint> {
    pub(crate) state: PoolState,
    pub(crate) holders: BTreeMap<Pubkey, HolderAccount>,
    pub(crate) validators: ValidatorRegistry,
    pub(crate) token: T,
    pub(crate) events: EventLog,
}

impl StakePool<ShareMint> {
    /// Create an empty pool backed by an in-memory [`ShareMint`].
    pub fn new(params: &InitPoolParams) -> Self {
        Self::with_share_token(params, ShareMint::new())
    }
}

impl<T: ShareToken> StakePool<T> {
    /// Create an empty pool that mirrors shares into `token`.
    pub fn with_share_token(params: &InitPoolParams, token: T) -> Self {
        Self {
            state: PoolState::new(params),
            holders: BTreeMap::new(),
            validators: ValidatorRegistry::new(),
            token,
            events: EventLog::new(),
        }
    }

    // ========================================================================
    // Conversion views
    // ========================================================================

    /// Shares that `amount` of base asset buys at the current rate.
    ///
    /// # Errors
    /// `ArithmeticOverflow` if the result does not fit in a `u64`.
    pub fn get_shares_by_pooled_asset(&self, amount: u64) -> Result<u64, ProgramError> {
        Ok(self.state.asset_to_shares(amount)?)
    }

    /// Base asset that `shares` redeem for at the current rate.
    ///
    /// # Errors
    /// `ArithmeticOverflow` if the result does not fit in a `u64`.
    pub fn get_pooled_asset_by_shares(&self, shares: u64) -> Result<u64, ProgramError> {
        Ok(self.state.shares_to_asset(shares)?)
    }

    // ========================================================================
    // Holder views
    // ========================================================================

    /// Shares owned by `holder`
    pub fn shares_of(&self, holder: &Pubkey) -> u64 {
        self.holders.get(holder).map_or(0, |h| h.shares)
    }

    /// Redeemable base asset of `holder`.
    ///
    /// Never fails: a holder's shares are bounded by `total_shares`, so the
    /// result is bounded by `total_pooled_asset`.
    pub fn balance_of(&self, holder: &Pubkey) -> u64 {
        let shares = self.shares_of(holder);
        if self.state.total_shares == 0 {
            return 0;
        }
        let amount = (shares as u128) * (self.state.total_pooled_asset as u128)
            / (self.state.total_shares as u128);
        u64::try_from(amount).unwrap_or(self.state.total_pooled_asset)
    }

    /// Holder record, if the holder ever deposited
    pub fn holder(&self, holder: &Pubkey) -> Option<&HolderAccount> {
        self.holders.get(holder)
    }

    /// Number of holder records
    pub fn holder_count(&self) -> usize {
        self.holders.len()
    }

    // ========================================================================
    // Pool views
    // ========================================================================

    /// Total base asset in the pool
    pub fn total_supply(&self) -> u64 {
        self.state.total_pooled_asset
    }

    /// Total shares outstanding
    pub fn total_shares(&self) -> u64 {
        self.state.total_shares
    }

    /// Pool state snapshot
    pub fn state(&self) -> &PoolState {
        &self.state
    }

    /// Current authority
    pub fn authority(&self) -> &Pubkey {
        &self.state.authority
    }

    /// Number of registered validators
    pub fn get_validator_count(&self) -> usize {
        self.validators.count()
    }

    /// Check if a validator is registered
    pub fn is_validator(&self, validator: &Pubkey) -> bool {
        self.validators.contains(validator)
    }

    /// Registered validators, in storage order
    pub fn validators(&self) -> &[Pubkey] {
        self.validators.as_slice()
    }

    /// Share token the pool mints and burns on
    pub fn share_token(&self) -> &T {
        &self.token
    }

    /// Events recorded since the last drain
    pub fn events(&self) -> &EventLog {
        &self.events
    }

    /// Remove and return recorded events.
    pub fn drain_events(&mut self) -> Vec<Vec<u8>> {
        self.events.drain()
    }

    // ========================================================================
    // Rollback
    // ========================================================================

    /// Snapshot the pool totals and one holder record.
    pub(crate) fn checkpoint(&self, holder: &Pubkey) -> Checkpoint {
        Checkpoint {
            state: self.state,
            holder: *holder,
            account: self.holders.get(holder).copied(),
        }
    }

    /// Restore a snapshot taken by [`Self::checkpoint`].
    pub(crate) fn restore(&mut self, checkpoint: Checkpoint) {
        self.state = checkpoint.state;
        match checkpoint.account {
            Some(account) => {
                self.holders.insert(checkpoint.holder, account);
            }
            None => {
                self.holders.remove(&checkpoint.holder);
            }
        }
    }

    /// Record of `holder`, created empty if absent.
    pub(crate) fn holder_mut(&mut self, holder: &Pubkey) -> &mut HolderAccount {
        self.holders
            .entry(*holder)
            .or_insert_with(|| HolderAccount::new(*holder))
    }
}

/// Pool state captured before a mutation that calls out to the host.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Checkpoint {
    state: PoolState,
    holder: Pubkey,
    account: Option<HolderAccount>,
}
