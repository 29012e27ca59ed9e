//! TwoToken interface consumed by the claim contract
//!
//! The subset of CEP-18 the claim contract needs: pulling approved deposits
//! in, paying claims out, and reading its own pool balance.

use odra::casper_types::U256;
use odra::prelude::*;

/// External contract interface for the TwoToken reward asset (CEP-18 subset)
#[odra::external_contract]
pub trait TwoToken {
    /// Transfer tokens from the caller to `to`
    fn transfer(&mut self, to: Address, amount: U256);

    /// Transfer tokens from `owner` to `to` using the caller's allowance
    fn transfer_from(&mut self, owner: Address, to: Address, amount: U256);

    /// Token balance of `owner`
    fn balance_of(&self, owner: Address) -> U256;
}
