//! Deposit instruction handler.
//!
//! The host has already moved the attached value into the pool; this handler
//! mints shares for it at the current rate and records the deposit.

use pinocchio::{program_error::ProgramError, pubkey::Pubkey};
use pinocchio_log::log;
use stake_pool_interface::NO_REFERRAL;

use crate::{ShareToken, StakePool, StakePoolError, events::SubmittedEvent, require};

impl<T: ShareToken> StakePool<T> {
    /// Deposit `amount` of base asset for `depositor`.
    ///
    /// 1. Validates amount, pool state and deposit cap
    /// 2. Converts amount to shares (1:1 on an empty pool)
    /// 3. Mints the shares on the share token
    /// 4. Credits the holder and pool totals
    /// 5. Emits [`SubmittedEvent`]
    ///
    /// Returns the shares minted. On any error nothing is changed.
    ///
    /// # Errors
    /// `ZeroDeposit`, `PoolPaused`, `DepositLimitExceeded`, `ZeroSharesToMint`,
    /// `ArithmeticOverflow`, or the share token's mint error.
    pub fn deposit(
        &mut self,
        depositor: &Pubkey,
        amount: u64,
        referral: &Pubkey,
    ) -> Result<u64, ProgramError> {
        self.non_reentrant("deposit", |pool| {
            pool.process_deposit(depositor, amount, referral)
        })
    }

    /// Bare value transfer: a deposit with no referral.
    ///
    /// # Errors
    /// Same as [`Self::deposit`].
    pub fn receive(&mut self, sender: &Pubkey, amount: u64) -> Result<u64, ProgramError> {
        self.deposit(sender, amount, &NO_REFERRAL)
    }

    fn process_deposit(
        &mut self,
        depositor: &Pubkey,
        amount: u64,
        referral: &Pubkey,
    ) -> Result<u64, ProgramError> {
        require!(amount > 0, "deposit", StakePoolError::ZeroDeposit);
        require!(
            self.state.is_active(),
            "deposit",
            StakePoolError::PoolPaused
        );
        require!(
            amount <= self.state.max_deposit_amount,
            "deposit",
            StakePoolError::DepositLimitExceeded
        );

        let shares = self.state.asset_to_shares(amount)?;

        // Only a non-empty pool can round a deposit down to nothing
        require!(shares > 0, "deposit", StakePoolError::ZeroSharesToMint);

        let total_pooled_asset = self
            .state
            .total_pooled_asset
            .checked_add(amount)
            .ok_or(StakePoolError::ArithmeticOverflow)?;
        let total_shares = self
            .state
            .total_shares
            .checked_add(shares)
            .ok_or(StakePoolError::ArithmeticOverflow)?;
        let holder_shares = self
            .shares_of(depositor)
            .checked_add(shares)
            .ok_or(StakePoolError::ArithmeticOverflow)?;
        let total_deposited = self
            .state
            .total_deposited
            .checked_add(amount as u128)
            .ok_or(StakePoolError::ArithmeticOverflow)?;
        let deposit_count = self
            .state
            .deposit_count
            .checked_add(1)
            .ok_or(StakePoolError::ArithmeticOverflow)?;

        // Mint before committing so a failed mint leaves the pool untouched
        if let Err(e) = self.token.mint(depositor, shares) {
            log!("deposit: share mint failed");
            return Err(e);
        }

        self.state.total_pooled_asset = total_pooled_asset;
        self.state.total_shares = total_shares;
        self.state.total_deposited = total_deposited;
        self.state.deposit_count = deposit_count;
        self.holder_mut(depositor).shares = holder_shares;

        self.events.emit(&SubmittedEvent {
            sender: *depositor,
            referral: *referral,
            amount,
            shares,
            total_pooled_asset,
            total_shares,
        });

        log!("deposit: amount={} shares={}", amount, shares);
        Ok(shares)
    }
}
