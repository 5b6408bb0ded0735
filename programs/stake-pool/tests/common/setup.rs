//! Pool construction and invariant helpers.

use pinocchio::pubkey::Pubkey;
use stake_pool::{InitPoolParams, ShareToken, StakePool};

/// Pool authority used across tests
pub const ADMIN: Pubkey = [0xAA; 32];

/// Deterministic test identity
pub const fn key(n: u8) -> Pubkey {
    [n; 32]
}

/// Empty pool administered by [`ADMIN`]
pub fn new_pool() -> StakePool {
    StakePool::new(&InitPoolParams::new(ADMIN))
}

/// Pool where each `(holder, amount)` has deposited in order
pub fn pool_with_deposits(deposits: &[(Pubkey, u64)]) -> StakePool {
    let mut pool = new_pool();
    for (holder, amount) in deposits {
        pool.receive(holder, *amount).expect("deposit");
    }
    pool.drain_events();
    pool
}

/// Check the ledger invariants that must hold after every call.
///
/// - both totals zero, or both positive
/// - holder shares sum to `total_shares`
/// - share token units mirror holder shares
/// - holder balances never exceed the pool
/// - lifetime statistics reconcile with `total_pooled_asset`
pub fn assert_invariants<T: ShareToken>(pool: &StakePool<T>, holders: &[Pubkey]) {
    let state = pool.state();

    assert_eq!(
        state.total_pooled_asset == 0,
        state.total_shares == 0,
        "totals out of step: asset={} shares={}",
        state.total_pooled_asset,
        state.total_shares
    );
    assert!(!state.is_locked(), "lock left held");
    assert_eq!(pool.total_supply(), state.total_pooled_asset);

    let mut share_sum: u128 = 0;
    let mut balance_sum: u128 = 0;
    for holder in holders {
        let shares = pool.shares_of(holder);
        assert_eq!(
            pool.share_token().units_of(holder),
            shares,
            "share units diverged from recorded shares"
        );
        share_sum += shares as u128;
        balance_sum += pool.balance_of(holder) as u128;
    }
    assert_eq!(share_sum, state.total_shares as u128);
    assert_eq!(pool.share_token().total_units(), state.total_shares);
    assert!(balance_sum <= state.total_pooled_asset as u128);

    assert_eq!(
        state.total_deposited + state.total_rewards_injected - state.total_withdrawn,
        state.total_pooled_asset as u128
    );
}
