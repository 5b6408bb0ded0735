//! Two-step authority transfer.
//!
//! The current authority nominates a successor with `transfer_authority`;
//! the nominee completes the handover with `accept_authority`. Until then the
//! current authority keeps full control and may re-nominate.

use pinocchio::pubkey::Pubkey;

use crate::{PoolState, StakePoolError};

/// Trait for state types that support two-step authority transfer.
pub trait HasAuthority {
    /// Get the current authority pubkey.
    fn authority(&self) -> &Pubkey;
    /// Get mutable reference to authority pubkey.
    fn authority_mut(&mut self) -> &mut Pubkey;
    /// Get the pending authority pubkey.
    fn pending_authority(&self) -> &Pubkey;
    /// Get mutable reference to pending authority pubkey.
    fn pending_authority_mut(&mut self) -> &mut Pubkey;
}

/// Sets the pending authority.
///
/// # Errors
/// * `Unauthorized` if signer is not the current authority
#[inline]
pub fn transfer_authority_impl<T: HasAuthority>(
    config: &mut T,
    signer: &Pubkey,
    new_authority: &Pubkey,
) -> Result<(), StakePoolError> {
    if config.authority() != signer {
        return Err(StakePoolError::Unauthorized);
    }

    *config.pending_authority_mut() = *new_authority;

    Ok(())
}

/// Promotes the pending authority and clears the nomination.
///
/// Returns the previous authority.
///
/// # Errors
/// * `NoPendingAuthority` if no pending authority is set
/// * `Unauthorized` if signer is not the pending authority
#[inline]
pub fn accept_authority_impl<T: HasAuthority>(
    config: &mut T,
    signer: &Pubkey,
) -> Result<Pubkey, StakePoolError> {
    if *config.pending_authority() == Pubkey::default() {
        return Err(StakePoolError::NoPendingAuthority);
    }

    if config.pending_authority() != signer {
        return Err(StakePoolError::Unauthorized);
    }

    let previous = *config.authority();
    *config.authority_mut() = *config.pending_authority();
    *config.pending_authority_mut() = Pubkey::default();

    Ok(previous)
}

impl HasAuthority for PoolState {
    fn authority(&self) -> &Pubkey {
        &self.authority
    }

    fn authority_mut(&mut self) -> &mut Pubkey {
        &mut self.authority
    }

    fn pending_authority(&self) -> &Pubkey {
        &self.pending_authority
    }

    fn pending_authority_mut(&mut self) -> &mut Pubkey {
        &mut self.pending_authority
    }
}
