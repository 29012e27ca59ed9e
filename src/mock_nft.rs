//! MockNft - Minimal OneNFT stand-in for tests and test networks
//!
//! Implements the ownership surface the claim contract reads (dense 1-based
//! token ids, `owner_of`, running mint count) plus mint and transfer entry
//! points for the harness to distribute tokens between holders.

use odra::prelude::*;

use crate::errors::Error;
use crate::events::{TokenMinted, TokenTransferred};

/// MockNft - Minimal OneNFT stand-in
#[odra::module]
pub struct MockNft {
    // Count of minted tokens; ids run 1..=token_ids
    token_ids: Var<u64>,
    owners: Mapping<u64, Address>,
    balances: Mapping<Address, u64>,
}

#[odra::module]
impl MockNft {
    pub fn init(&mut self) {
        self.token_ids.set(0);
    }

    /// Mint a new token to the caller and return its id
    pub fn create_token(&mut self) -> u64 {
        let caller = self.env().caller();

        let token_id = self.token_ids.get_or_default() + 1;
        self.token_ids.set(token_id);
        self.owners.set(&token_id, caller);

        let balance = self.balances.get(&caller).unwrap_or_default();
        self.balances.set(&caller, balance + 1);

        self.env().emit_event(TokenMinted {
            owner: caller,
            token_id,
        });

        token_id
    }

    /// Transfer `token_id` from `from` to `to`
    ///
    /// The caller must be the current owner. No approval machinery: this is
    /// a mock, holders move their own tokens.
    pub fn safe_transfer_from(&mut self, from: Address, to: Address, token_id: u64) {
        let owner = self
            .owners
            .get(&token_id)
            .unwrap_or_revert_with(&self.env(), Error::TokenNotFound);

        if owner != from || self.env().caller() != owner {
            self.env().revert(Error::NotTokenOwner);
        }

        self.owners.set(&token_id, to);

        let from_balance = self.balances.get(&from).unwrap_or_default();
        self.balances.set(&from, from_balance - 1);
        let to_balance = self.balances.get(&to).unwrap_or_default();
        self.balances.set(&to, to_balance + 1);

        self.env().emit_event(TokenTransferred { from, to, token_id });
    }

    /// Owner of a minted token id
    pub fn owner_of(&self, token_id: u64) -> Address {
        self.owners
            .get(&token_id)
            .unwrap_or_revert_with(&self.env(), Error::TokenNotFound)
    }

    /// Running count of minted tokens
    pub fn token_ids(&self) -> u64 {
        self.token_ids.get_or_default()
    }

    /// Number of tokens held by `owner`
    pub fn balance_of(&self, owner: Address) -> u64 {
        self.balances.get(&owner).unwrap_or_default()
    }
}
