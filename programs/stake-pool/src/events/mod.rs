//! Event definitions for the stake pool.
//!
//! Events are appended to the pool's [`EventLog`] after a call succeeds and
//! are drained by the host. A failed call records nothing.
//!
//! # Event Types
//!
//! - [`SubmittedEvent`] - Emitted when value is deposited
//! - [`WithdrawalEvent`] - Emitted when a holder withdraws
//! - [`RewardsInjectedEvent`] - Emitted when the authority injects rewards
//!
//! # Event Pattern
//!
//! Every event is a `#[repr(C)]` `Pod` struct that implements
//! [`Discriminator`] and [`Event`] through `impl_event!`. The recorded bytes
//! are `[discriminator (u64 LE), struct bytes...]`, see [`EventBytes`].

use alloc::vec::Vec;
use bytemuck::{Pod, Zeroable};
use pinocchio::pubkey::Pubkey;
use pinocchio_log::log;

/// Event type discriminators for identifying event types in the log.
///
/// # Ranges
/// - **1-15**: Core events (deposit, withdrawal, rewards)
/// - **16-31**: Admin events
#[repr(u64)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::IntoStaticStr)]
pub enum EventType {
    // =========================================================================
    // Core Events (1-15)
    // =========================================================================
    /// Deposit accepted
    Submitted = 1,
    /// Withdrawal completed
    Withdrawal = 2,
    /// Rewards added to the pool
    RewardsInjected = 3,
    // Reserved: 4-15

    // =========================================================================
    // Admin Events (16-31)
    // =========================================================================
    /// Validator registered
    ValidatorAdded = 16,
    /// Validator unregistered
    ValidatorRemoved = 17,
    /// Pool paused or resumed
    PoolActiveChanged = 18,
    /// Authority handover completed
    AuthorityTransferred = 19,
}

/// Type-level event discriminator.
pub trait Discriminator {
    /// Discriminator prepended to serialized event data
    const DISCRIMINATOR: u64;
}

/// Event metadata.
pub trait Event {
    /// Returns the name of this event type
    fn name() -> &'static str;
}

/// Serialization for events: discriminator followed by the Pod bytes.
pub trait EventBytes: Discriminator + Event + Pod + Sized {
    /// Serialize the event to bytes with the discriminator prepended
    fn to_event_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(8 + core::mem::size_of::<Self>());
        bytes.extend_from_slice(&Self::DISCRIMINATOR.to_le_bytes());
        bytes.extend_from_slice(bytemuck::bytes_of(self));
        bytes
    }

    /// Parse event bytes, returning `None` on a discriminator or length mismatch
    fn from_event_bytes(bytes: &[u8]) -> Option<Self> {
        let (disc, data) = bytes.split_first_chunk::<8>()?;
        if u64::from_le_bytes(*disc) != Self::DISCRIMINATOR
            || data.len() != core::mem::size_of::<Self>()
        {
            return None;
        }
        bytemuck::try_pod_read_unaligned(data).ok()
    }
}

impl<T: Discriminator + Event + Pod> EventBytes for T {}

macro_rules! impl_event {
    ($event:ty, $kind:expr) => {
        impl Discriminator for $event {
            const DISCRIMINATOR: u64 = $kind as u64;
        }

        impl Event for $event {
            fn name() -> &'static str {
                $kind.into()
            }
        }
    };
}

/// Event emitted when value is deposited and shares are minted.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable)]
pub struct SubmittedEvent {
    /// Depositor
    pub sender: Pubkey,
    /// Referral identity (all zero for none)
    pub referral: Pubkey,
    /// Amount deposited (in base-asset units)
    pub amount: u64,
    /// Shares minted to the depositor
    pub shares: u64,
    /// Pool asset after the deposit
    pub total_pooled_asset: u64,
    /// Pool shares after the deposit
    pub total_shares: u64,
}

impl_event!(SubmittedEvent, EventType::Submitted);

/// Event emitted when a holder withdraws.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable)]
pub struct WithdrawalEvent {
    /// Holder the asset was released to
    pub recipient: Pubkey,
    /// Amount withdrawn (in base-asset units)
    pub amount: u64,
    /// Shares burned from the holder
    pub shares: u64,
    /// Pool asset after the withdrawal
    pub total_pooled_asset: u64,
    /// Pool shares after the withdrawal
    pub total_shares: u64,
}

impl_event!(WithdrawalEvent, EventType::Withdrawal);

/// Event emitted when the authority injects rewards.
///
/// Compare `total_pooled_asset / total_shares` across events to track the
/// exchange rate.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable)]
pub struct RewardsInjectedEvent {
    /// Authority that injected the rewards
    pub authority: Pubkey,
    /// Reward amount (in base-asset units)
    pub amount: u64,
    /// Pool asset after the injection
    pub total_pooled_asset: u64,
    /// Pool shares (unchanged by injection)
    pub total_shares: u64,
}

impl_event!(RewardsInjectedEvent, EventType::RewardsInjected);

/// Event emitted when a validator is registered.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable)]
pub struct ValidatorAddedEvent {
    /// Validator identity
    pub validator: Pubkey,
    /// Registered validators after the change
    pub validator_count: u64,
}

impl_event!(ValidatorAddedEvent, EventType::ValidatorAdded);

/// Event emitted when a validator is unregistered.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable)]
pub struct ValidatorRemovedEvent {
    /// Validator identity
    pub validator: Pubkey,
    /// Registered validators after the change
    pub validator_count: u64,
}

impl_event!(ValidatorRemovedEvent, EventType::ValidatorRemoved);

/// Event emitted when the pool is paused or resumed.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable)]
pub struct PoolActiveChangedEvent {
    /// Authority that changed the state
    pub authority: Pubkey,
    /// New active state (1 = active, 0 = paused)
    pub is_active: u8,
    /// Padding for 8-byte alignment
    pub _padding: [u8; 7],
}

impl_event!(PoolActiveChangedEvent, EventType::PoolActiveChanged);

/// Event emitted when a pending authority accepts the role.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable)]
pub struct AuthorityTransferredEvent {
    /// Authority before the handover
    pub previous_authority: Pubkey,
    /// Authority after the handover
    pub new_authority: Pubkey,
}

impl_event!(AuthorityTransferredEvent, EventType::AuthorityTransferred);

/// Append-only record of emitted events.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    entries: Vec<Vec<u8>>,
}

impl EventLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an event.
    pub fn emit<E: EventBytes>(&mut self, event: &E) {
        log!("event: {}", E::name());
        self.entries.push(event.to_event_bytes());
    }

    /// Recorded events, oldest first
    pub fn entries(&self) -> &[Vec<u8>] {
        &self.entries
    }

    /// Number of recorded events
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no events are recorded
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove and return every recorded event.
    pub fn drain(&mut self) -> Vec<Vec<u8>> {
        core::mem::take(&mut self.entries)
    }
}

/// Read the discriminator of serialized event bytes.
pub fn event_discriminator(bytes: &[u8]) -> Option<u64> {
    bytes
        .first_chunk::<8>()
        .map(|disc| u64::from_le_bytes(*disc))
}
