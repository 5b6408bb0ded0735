//! Randomized operation sequences checking ledger invariants.
//!
//! Uses a fixed-seed LCG so failures reproduce exactly.

mod common;

use common::*;
use pinocchio::pubkey::Pubkey;
use stake_pool::StakePoolError;

/// Simple deterministic RNG for reproducible tests (LCG)
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.state
    }

    fn gen_range(&mut self, max: u64) -> u64 {
        self.next_u64() % max
    }
}

const HOLDERS: usize = 5;

fn holders() -> Vec<Pubkey> {
    (1..=HOLDERS as u8).map(key).collect()
}

#[test]
fn test_random_operations_preserve_invariants() {
    for seed in [1u64, 42, 12345, 0xDEAD_BEEF] {
        let mut rng = SimpleRng::new(seed);
        let mut pool = new_pool();
        let mut vault = RecordingVault::default();
        let holders = holders();

        for _ in 0..2_000 {
            let holder = holders[rng.gen_range(HOLDERS as u64) as usize];
            match rng.gen_range(10) {
                0..=4 => {
                    let amount = 1 + rng.gen_range(1_000_000);
                    let before = pool.total_supply();
                    match pool.receive(&holder, amount) {
                        Ok(shares) => {
                            assert!(shares > 0);
                            assert_eq!(pool.total_supply(), before + amount);
                        }
                        Err(e) => {
                            assert_eq!(e, StakePoolError::ZeroSharesToMint.into());
                            assert_eq!(pool.total_supply(), before);
                        }
                    }
                }
                5..=7 => {
                    let balance = pool.balance_of(&holder);
                    if balance == 0 {
                        continue;
                    }
                    let amount = 1 + rng.gen_range(balance);
                    let before = pool.total_supply();
                    match pool.withdraw(&mut vault, &holder, amount) {
                        Ok(_) => assert_eq!(pool.total_supply(), before - amount),
                        Err(e) => {
                            assert_eq!(e, StakePoolError::ZeroSharesToBurn.into());
                            assert_eq!(pool.total_supply(), before);
                        }
                    }
                }
                _ => {
                    if pool.total_shares() == 0 {
                        continue;
                    }
                    let rate_before = pool.get_pooled_asset_by_shares(1_000_000).unwrap();
                    pool.inject_rewards(&ADMIN, 1 + rng.gen_range(100_000)).unwrap();
                    let rate_after = pool.get_pooled_asset_by_shares(1_000_000).unwrap();
                    assert!(rate_after >= rate_before);
                }
            }

            assert_invariants(&pool, &holders);
        }
    }
}

#[test]
fn test_round_trip_bound_across_rates() {
    let mut rng = SimpleRng::new(7);
    let mut pool = pool_with_deposits(&[(key(1), 1_000_003)]);

    for _ in 0..500 {
        pool.inject_rewards(&ADMIN, 1 + rng.gen_range(10_000)).unwrap();

        let amount = rng.gen_range(u32::MAX as u64);
        let shares = pool.get_shares_by_pooled_asset(amount).unwrap();
        let back = pool.get_pooled_asset_by_shares(shares).unwrap();
        assert!(back <= amount, "round trip gained: {amount} -> {shares} -> {back}");
    }
}

#[test]
fn test_failed_transfers_never_change_state() {
    let mut rng = SimpleRng::new(99);
    let holders = holders();
    let mut pool = new_pool();
    for holder in &holders {
        pool.receive(holder, 1 + rng.gen_range(10_000)).unwrap();
    }
    pool.inject_rewards(&ADMIN, 12_345).unwrap();
    pool.drain_events();

    let mut failing = FailingVault::default();
    for _ in 0..200 {
        let holder = holders[rng.gen_range(HOLDERS as u64) as usize];
        let balance = pool.balance_of(&holder);
        let amount = 1 + rng.gen_range(balance);
        let before = *pool.state();

        let result = pool.withdraw(&mut failing, &holder, amount);

        assert!(result.is_err());
        assert_eq!(*pool.state(), before);
        assert!(pool.events().is_empty());
        assert_invariants(&pool, &holders);
    }
}
