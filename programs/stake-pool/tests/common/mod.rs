//! Shared test helpers for stake-pool tests.

#![allow(dead_code)]

pub mod hosts;
pub mod instructions;
pub mod setup;

pub use hosts::*;
pub use instructions::*;
pub use setup::*;
