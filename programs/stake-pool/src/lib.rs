//! Stake Pool
//!
//! Pooled-asset ledger with share-based accounting. Depositors contribute a
//! base asset and receive shares; reward injection raises the value of every
//! share without moving any of them.
//!
//! # Architecture
//!
//! The ledger ([`StakePool`]) is host-agnostic. The host:
//! - Supplies caller identity and attached value ([`Invocation`])
//! - Releases the base asset on withdrawal ([`AssetTransfer`])
//! - Drains recorded events ([`StakePool::drain_events`])
//!
//! Shares are mirrored into a [`ShareToken`]; [`ShareMint`] is the in-memory
//! implementation.
//!
//! # Instructions
//!
//! - `Deposit`: Mint shares for the attached value (also bare receive)
//! - `Withdraw`: Burn shares and release the asset
//! - `InjectRewards`: Add reward asset without minting shares
//! - `AddValidator` / `RemoveValidator`: Maintain the validator registry
//! - `SetPoolActive` / `SetDepositLimit`: Pool administration
//! - `TransferAuthority` / `AcceptAuthority`: Two-step authority handover

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod authority;
pub mod errors;
pub mod events;
mod guard;
pub mod host;
pub mod instructions;
mod pool;
pub mod registry;
pub mod state;
pub mod token;

// Error and event types
pub use errors::StakePoolError;
pub use events::{
    AuthorityTransferredEvent, EventBytes, EventLog, EventType, PoolActiveChangedEvent,
    RewardsInjectedEvent, SubmittedEvent, ValidatorAddedEvent, ValidatorRemovedEvent,
    WithdrawalEvent,
};

// Host seam and dispatch
pub use host::{AssetTransfer, Invocation};
pub use instructions::process_instruction;

// Ledger, state and collaborators
pub use pool::StakePool;
pub use registry::ValidatorRegistry;
pub use state::{HolderAccount, InitPoolParams, PoolState};
pub use token::{ShareMint, ShareToken};
