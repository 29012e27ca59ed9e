//! OneNFT interface consumed by the claim contract
//!
//! The claim contract never caches ownership: it reads the NFT contract's
//! records at deposit time, so the holder set is always the one current
//! when the deposit lands.
//!
//! Token ids are 1-based and dense: `token_ids()` returns the count of
//! minted tokens and every id in `1..=token_ids()` has an owner.

use odra::prelude::*;

/// External contract interface for the OneNFT collection
///
/// `MockNft` implements these entry points for tests and test networks;
/// on production networks the address of the real OneNFT contract is
/// passed at deployment.
#[odra::external_contract]
pub trait OneNft {
    /// Owner of a minted token id
    ///
    /// Reverts if the id has not been minted.
    fn owner_of(&self, token_id: u64) -> Address;

    /// Running count of minted tokens (highest minted id)
    fn token_ids(&self) -> u64;
}
