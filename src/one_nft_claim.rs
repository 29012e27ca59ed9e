//! OneNftClaim - Proportional reward distribution contract
//!
//! Holds TwoToken rewards deposited by the project and tracks, per address,
//! how much each OneNFT holder may claim. Allocation is read from the NFT
//! contract's ownership records at deposit time.

use odra::casper_types::U256;
use odra::prelude::*;
use odra::ContractRef;

use crate::errors::Error;
use crate::events::{RewardsClaimed, RewardsDeposited};
use crate::nft_interface::OneNftContractRef;
use crate::token_interface::TwoTokenContractRef;

/// OneNftClaim - Proportional reward distribution contract
#[odra::module]
pub struct OneNftClaim {
    // Collaborator references
    one_nft: Var<Address>,
    two_token: Var<Address>,

    // Claimable-balance ledger, funded by deposits, zeroed by claims
    two_token_can_claim: Mapping<Address, U256>,
}

#[odra::module]
impl OneNftClaim {
    /// Initialize the contract
    ///
    /// # Arguments
    /// * `one_nft` - Address of the OneNFT contract whose holders earn rewards
    /// * `two_token` - Address of the TwoToken reward token contract
    pub fn init(&mut self, one_nft: Address, two_token: Address) {
        self.one_nft.set(one_nft);
        self.two_token.set(two_token);
    }

    // ============ CORE FUNCTIONS ============

    /// Deposit `amount` of TwoToken and credit every current holder
    /// proportionally to their share of the minted supply
    ///
    /// The caller must have approved this contract for `amount` beforehand.
    /// Allocations from repeated deposits accumulate additively.
    pub fn deposit_rewards(&mut self, amount: U256) {
        let total = self.minted_token_count();
        self.deposit_over_range(amount, 1, total);
    }

    /// Deposit `amount` of TwoToken and credit only the holders of token ids
    /// in `[start_index, end_index]` (inclusive, 1-based)
    ///
    /// Each token id in the chunk is credited `amount / chunk_size`, so
    /// chunked deposits covering the full id range with amounts proportional
    /// to chunk size add up to exactly one full deposit of the combined
    /// amount. This bounds per-call work for large holder sets.
    pub fn deposit_rewards_in_chunks(&mut self, amount: U256, start_index: u64, end_index: u64) {
        let total = self.minted_token_count();
        if start_index == 0 || start_index > end_index || end_index > total {
            self.env().revert(Error::InvalidChunkRange);
        }
        self.deposit_over_range(amount, start_index, end_index);
    }

    /// Transfer the caller's full claimable balance to them and zero the
    /// ledger entry
    ///
    /// Reverts with [`Error::NothingToClaim`] when the caller has no rewards:
    /// holders of a OneNFT should wait until the next reward deposit.
    pub fn claim_rewards(&mut self) -> U256 {
        let caller = self.env().caller();

        let amount = self.two_token_can_claim.get(&caller).unwrap_or_default();
        if amount == U256::zero() {
            self.env().revert(Error::NothingToClaim);
        }

        // Zero the ledger entry BEFORE the external transfer (CEI pattern)
        self.two_token_can_claim.set(&caller, U256::zero());

        self.two_token_ref().transfer(caller, amount);

        self.env().emit_event(RewardsClaimed {
            holder: caller,
            amount,
        });

        amount
    }

    // ============ VIEW FUNCTIONS ============

    /// Current claimable TwoToken balance of `address`
    pub fn address_to_two_token_can_claim(&self, address: Address) -> U256 {
        self.two_token_can_claim.get(&address).unwrap_or_default()
    }

    /// TwoToken currently held by the contract (undisbursed pool,
    /// including rounding dust from past deposits)
    pub fn get_reward_pool(&self) -> U256 {
        self.two_token_ref().balance_of(self.env().self_address())
    }

    /// Get the OneNFT contract address
    pub fn get_one_nft(&self) -> Option<Address> {
        self.one_nft.get()
    }

    /// Get the TwoToken contract address
    pub fn get_two_token(&self) -> Option<Address> {
        self.two_token.get()
    }

    // ============ INTERNAL FUNCTIONS ============

    /// Credit holders of token ids in `[start, end]` and pull `amount` in
    ///
    /// Per-token shares use truncating division; the remainder
    /// `amount - share * range_size` stays in the pool so the ledger can
    /// never exceed the contract's token balance.
    fn deposit_over_range(&mut self, amount: U256, start: u64, end: u64) {
        if amount == U256::zero() {
            self.env().revert(Error::AmountMustBePositive);
        }

        let caller = self.env().caller();
        let range_size = end - start + 1;
        let per_token_share = amount / U256::from(range_size);

        let nft = self.one_nft_ref();
        for token_id in start..=end {
            let owner = nft.owner_of(token_id);
            let current = self.two_token_can_claim.get(&owner).unwrap_or_default();
            self.two_token_can_claim.set(&owner, current + per_token_share);
        }

        // Pull the deposit in after the ledger update; the whole call
        // reverts if the caller's allowance or balance is insufficient
        self.two_token_ref()
            .transfer_from(caller, self.env().self_address(), amount);

        self.env().emit_event(RewardsDeposited {
            depositor: caller,
            amount,
            start_index: start,
            end_index: end,
        });
    }

    fn minted_token_count(&self) -> u64 {
        let total = self.one_nft_ref().token_ids();
        if total == 0 {
            self.env().revert(Error::NoNftsMinted);
        }
        total
    }

    fn one_nft_ref(&self) -> OneNftContractRef {
        let nft_address = self
            .one_nft
            .get()
            .unwrap_or_revert_with(&self.env(), Error::NftNotSet);
        OneNftContractRef::new(self.env(), nft_address)
    }

    fn two_token_ref(&self) -> TwoTokenContractRef {
        let token_address = self
            .two_token
            .get()
            .unwrap_or_revert_with(&self.env(), Error::TokenNotSet);
        TwoTokenContractRef::new(self.env(), token_address)
    }
}
