//! Tests for reward injection and the exchange rate.

mod common;

use common::*;
use stake_pool::{EventBytes, RewardsInjectedEvent, ShareToken, StakePoolError};

#[test]
fn test_rewards_split_pro_rata() {
    let mut pool = pool_with_deposits(&[(key(1), 100), (key(2), 100)]);

    pool.inject_rewards(&ADMIN, 100).unwrap();

    assert_eq!(pool.balance_of(&key(1)), 150);
    assert_eq!(pool.balance_of(&key(2)), 150);
    assert_eq!(pool.total_supply(), 300);
    assert_eq!(pool.total_shares(), 200);
    assert_invariants(&pool, &[key(1), key(2)]);
}

#[test]
fn test_rewards_mint_nothing() {
    let mut pool = pool_with_deposits(&[(key(1), 100)]);
    let units_before = pool.share_token().total_units();

    pool.inject_rewards(&ADMIN, 25).unwrap();

    assert_eq!(pool.share_token().total_units(), units_before);
    assert_eq!(pool.shares_of(&key(1)), 100);
    assert_eq!(pool.state().total_rewards_injected, 25);
}

#[test]
fn test_rate_monotonic_after_injection() {
    let mut pool = pool_with_deposits(&[(key(1), 1_000), (key(2), 333)]);

    let mut last_value = pool.get_pooled_asset_by_shares(1_000).unwrap();
    let mut last_shares = pool.get_shares_by_pooled_asset(1_000).unwrap();
    for reward in [1, 7, 100, 12_345] {
        pool.inject_rewards(&ADMIN, reward).unwrap();

        let value = pool.get_pooled_asset_by_shares(1_000).unwrap();
        let shares = pool.get_shares_by_pooled_asset(1_000).unwrap();
        assert!(value >= last_value);
        assert!(shares <= last_shares);
        last_value = value;
        last_shares = shares;
    }
}

#[test]
fn test_inject_validation() {
    let mut pool = new_pool();

    assert_eq!(
        pool.inject_rewards(&ADMIN, 0),
        Err(StakePoolError::ZeroRewards.into())
    );
    assert_eq!(
        pool.inject_rewards(&key(1), 10),
        Err(StakePoolError::Unauthorized.into())
    );
    assert_eq!(
        pool.inject_rewards(&ADMIN, 10),
        Err(StakePoolError::EmptyPool.into())
    );
    assert_eq!(pool.total_supply(), 0);
    assert!(pool.events().is_empty());
}

#[test]
fn test_zero_check_precedes_authority_check() {
    let mut pool = pool_with_deposits(&[(key(1), 10)]);

    assert_eq!(
        pool.inject_rewards(&key(1), 0),
        Err(StakePoolError::ZeroRewards.into())
    );
}

#[test]
fn test_rewards_event() {
    let mut pool = pool_with_deposits(&[(key(1), 100)]);

    pool.inject_rewards(&ADMIN, 50).unwrap();

    let events = pool.drain_events();
    let event = RewardsInjectedEvent::from_event_bytes(&events[0]).unwrap();
    assert_eq!(event.authority, ADMIN);
    assert_eq!(event.amount, 50);
    assert_eq!(event.total_pooled_asset, 150);
    assert_eq!(event.total_shares, 100);
}

#[test]
fn test_rewards_work_while_paused() {
    let mut pool = pool_with_deposits(&[(key(1), 100)]);
    pool.set_pool_active(&ADMIN, false).unwrap();

    pool.inject_rewards(&ADMIN, 10).unwrap();

    assert_eq!(pool.total_supply(), 110);
}
