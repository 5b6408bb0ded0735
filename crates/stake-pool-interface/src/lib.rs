//! Stake Pool Interface
//!
//! Shared types for the stake pool ledger and the hosts that drive it.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         Host                                 │
//! │  • Supplies caller identity and attached value               │
//! │  • Builds instruction data with this crate                   │
//! │  • Releases the base asset on withdrawal                     │
//! └─────────────────────────────────────────────────────────────┘
//!                             │
//!                             ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      stake-pool                              │
//! │  • Pool totals and per-holder shares                         │
//! │  • Deposit / withdraw / reward injection                     │
//! │  • Validator registry, authority, events                     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Share Accounting
//!
//! The pool never stores asset balances per holder. A holder owns shares, and
//! the asset value of those shares is derived from the pool totals:
//! ```text
//! shares = amount × total_shares / total_pooled_asset   (floor)
//! amount = shares × total_pooled_asset / total_shares   (floor)
//! ```
//!
//! # Modules
//!
//! - [`types`]: Conversion math, instruction params and return data
//! - [`instruction`]: Instruction discriminators and data builders

#![no_std]

mod instruction;
mod types;

pub use instruction::*;
pub use types::*;
