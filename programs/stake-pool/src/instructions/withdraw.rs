//! Withdraw instruction handler.
//!
//! Burns the holder's shares worth the requested amount, commits the pool
//! state, then asks the host to release the asset. A failed release restores
//! the pool to its state before the call.

use pinocchio::{program_error::ProgramError, pubkey::Pubkey};
use pinocchio_log::log;

use crate::{
    AssetTransfer, ShareToken, StakePool, StakePoolError, events::WithdrawalEvent, require,
};

impl<T: ShareToken> StakePool<T> {
    /// Withdraw `amount` of base asset to `holder`.
    ///
    /// 1. Validates amount, pool state and the holder's redeemable balance
    /// 2. Converts amount to shares to burn
    /// 3. Burns the shares on the share token
    /// 4. Debits the holder and pool totals
    /// 5. Transfers the asset to the holder via `host`
    /// 6. Emits [`WithdrawalEvent`]
    ///
    /// Returns the shares burned. The pool lock is held throughout, so the
    /// host cannot re-enter any mutating call during step 5.
    ///
    /// # Errors
    /// `ZeroWithdrawal`, `PoolPaused`, `InsufficientBalance`,
    /// `ZeroSharesToBurn`, `ArithmeticOverflow`, the share token's burn error,
    /// or `TransferFailed` if the host transfer fails (fully rolled back).
    pub fn withdraw<H: AssetTransfer<T>>(
        &mut self,
        host: &mut H,
        holder: &Pubkey,
        amount: u64,
    ) -> Result<u64, ProgramError> {
        self.non_reentrant("withdraw", |pool| {
            pool.process_withdraw(host, holder, amount)
        })
    }

    fn process_withdraw<H: AssetTransfer<T>>(
        &mut self,
        host: &mut H,
        holder: &Pubkey,
        amount: u64,
    ) -> Result<u64, ProgramError> {
        require!(amount > 0, "withdraw", StakePoolError::ZeroWithdrawal);
        require!(
            self.state.is_active(),
            "withdraw",
            StakePoolError::PoolPaused
        );
        require!(
            self.balance_of(holder) >= amount,
            "withdraw",
            StakePoolError::InsufficientBalance
        );

        let shares = self.state.asset_to_shares(amount)?;
        require!(shares > 0, "withdraw", StakePoolError::ZeroSharesToBurn);

        // A balance covering `amount` implies enough shares, but checked anyway
        let holder_shares = self
            .shares_of(holder)
            .checked_sub(shares)
            .ok_or(StakePoolError::InsufficientBalance)?;
        let total_shares = self
            .state
            .total_shares
            .checked_sub(shares)
            .ok_or(StakePoolError::ArithmeticOverflow)?;
        let total_pooled_asset = self
            .state
            .total_pooled_asset
            .checked_sub(amount)
            .ok_or(StakePoolError::ArithmeticOverflow)?;
        let total_withdrawn = self
            .state
            .total_withdrawn
            .checked_add(amount as u128)
            .ok_or(StakePoolError::ArithmeticOverflow)?;
        let withdrawal_count = self
            .state
            .withdrawal_count
            .checked_add(1)
            .ok_or(StakePoolError::ArithmeticOverflow)?;

        if let Err(e) = self.token.burn(holder, shares) {
            log!("withdraw: share burn failed");
            return Err(e);
        }

        let checkpoint = self.checkpoint(holder);

        self.state.total_pooled_asset = total_pooled_asset;
        self.state.total_shares = total_shares;
        self.state.total_withdrawn = total_withdrawn;
        self.state.withdrawal_count = withdrawal_count;
        self.holder_mut(holder).shares = holder_shares;

        // External effect last
        if host.transfer(self, holder, amount).is_err() {
            self.restore(checkpoint);
            self.token.mint(holder, shares)?;
            log!(
                "withdraw: {}",
                StakePoolError::TransferFailed.name()
            );
            return Err(StakePoolError::TransferFailed.into());
        }

        self.events.emit(&WithdrawalEvent {
            recipient: *holder,
            amount,
            shares,
            total_pooled_asset,
            total_shares,
        });

        log!("withdraw: amount={} shares={}", amount, shares);
        Ok(shares)
    }
}
