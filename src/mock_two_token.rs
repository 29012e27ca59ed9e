//! MockTwoToken - CEP-18 compliant reward token for tests and test networks
//!
//! Mints an initial supply to the deployer so the harness can fund deposits
//! without extra setup.

use odra::casper_types::U256;
use odra::prelude::*;
use odra_modules::cep18_token::Cep18;

/// Initial supply minted to the deployer (1,000,000 tokens at 9 decimals)
pub const INITIAL_SUPPLY: u64 = 1_000_000_000_000_000;

/// MockTwoToken - Mock reward token
#[odra::module]
pub struct MockTwoToken {
    /// CEP-18 token implementation
    cep18: SubModule<Cep18>,
}

#[odra::module]
impl MockTwoToken {
    /// Initialize the token and mint the initial supply to the caller
    pub fn init(&mut self) {
        self.cep18.init(
            "Mock TwoToken".to_string(),
            "TWOT".to_string(),
            9,
            U256::from(INITIAL_SUPPLY),
        );
    }

    /// Transfer tokens - standard CEP-18 passthrough
    pub fn transfer(&mut self, to: Address, amount: U256) {
        self.cep18.transfer(&to, &amount);
    }

    /// Approve spender - standard CEP-18 passthrough
    pub fn approve(&mut self, spender: Address, amount: U256) {
        self.cep18.approve(&spender, &amount);
    }

    /// Transfer from - standard CEP-18 passthrough
    pub fn transfer_from(&mut self, owner: Address, to: Address, amount: U256) {
        self.cep18.transfer_from(&owner, &to, &amount);
    }

    /// Get token balance - standard CEP-18 view
    pub fn balance_of(&self, owner: Address) -> U256 {
        self.cep18.balance_of(&owner)
    }

    /// Get allowance - standard CEP-18 view
    pub fn allowance(&self, owner: Address, spender: Address) -> U256 {
        self.cep18.allowance(&owner, &spender)
    }

    /// Get total supply
    pub fn total_supply(&self) -> U256 {
        self.cep18.total_supply()
    }

    /// Get token name
    pub fn name(&self) -> String {
        self.cep18.name()
    }

    /// Get token symbol
    pub fn symbol(&self) -> String {
        self.cep18.symbol()
    }

    /// Get token decimals
    pub fn decimals(&self) -> u8 {
        self.cep18.decimals()
    }
}
