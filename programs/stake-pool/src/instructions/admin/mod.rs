//! Authority-gated pool management.

mod accept_authority;
mod add_validator;
mod remove_validator;
mod set_deposit_limit;
mod set_pool_active;
mod transfer_authority;
