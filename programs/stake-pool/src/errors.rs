//! Stake pool errors.

use pinocchio::program_error::ProgramError;

/// Stake pool error codes.
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::IntoStaticStr)]
pub enum StakePoolError {
    /// Deposit of zero value
    ZeroDeposit = 0,
    /// Withdrawal of zero amount
    ZeroWithdrawal = 1,
    /// Reward injection of zero amount
    ZeroRewards = 2,
    /// Withdrawal exceeds the holder's redeemable balance
    InsufficientBalance = 3,
    /// Withdrawal amount converts to zero shares
    ZeroSharesToBurn = 4,
    /// Unauthorized - caller is not the authority
    Unauthorized = 5,
    /// Validator is already registered
    AlreadyExists = 6,
    /// Validator is not registered
    NotFound = 7,
    /// Outbound asset transfer failed; the withdrawal was rolled back
    TransferFailed = 8,
    /// Mutating call while another is in flight
    ReentrantCall = 9,
    /// Deposit converts to zero shares on a non-empty pool
    ZeroSharesToMint = 10,
    /// Arithmetic overflow
    ArithmeticOverflow = 11,
    /// Reward injection with no shares outstanding
    EmptyPool = 12,
    /// Pool is paused
    PoolPaused = 13,
    /// Deposit exceeds maximum allowed
    DepositLimitExceeded = 14,
    /// Invalid amount (zero or out of range)
    InvalidAmount = 15,
    /// No pending authority to accept
    NoPendingAuthority = 16,
    /// Invalid instruction data
    InvalidInstructionData = 17,
    /// Value attached to a non-payable instruction
    UnexpectedValue = 18,
    /// Share token burn exceeds the holder's units
    InsufficientShareUnits = 19,
}

impl StakePoolError {
    /// Variant name, for logging.
    pub fn name(self) -> &'static str {
        self.into()
    }
}

impl From<StakePoolError> for ProgramError {
    fn from(e: StakePoolError) -> Self {
        ProgramError::Custom(e as u32)
    }
}

/// Return early with a [`StakePoolError`], logging the operation and error name.
///
/// ```ignore
/// bail_err!("withdraw", StakePoolError::ZeroWithdrawal);
/// ```
#[macro_export]
macro_rules! bail_err {
    ($op:literal, $err:expr) => {{
        let err: $crate::StakePoolError = $err;
        ::pinocchio_log::log!("{}: {}", $op, err.name());
        return Err(err.into());
    }};
}

/// Bail with a [`StakePoolError`] unless the condition holds.
///
/// ```ignore
/// require!(amount > 0, "deposit", StakePoolError::ZeroDeposit);
/// ```
#[macro_export]
macro_rules! require {
    ($cond:expr, $op:literal, $err:expr) => {{
        if !$cond {
            $crate::bail_err!($op, $err);
        }
    }};
}
