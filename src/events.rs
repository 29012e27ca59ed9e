//! Events for the OneNFT claim system (CES compliant)

use odra::casper_types::U256;
use odra::prelude::*;

/// Emitted when rewards are deposited and allocated to holders
///
/// Full deposits report the whole token id range; chunked deposits
/// report the sub-range they covered.
#[odra::event]
pub struct RewardsDeposited {
    pub depositor: Address,
    pub amount: U256,
    pub start_index: u64,
    pub end_index: u64,
}

/// Emitted when a holder claims their accumulated rewards
#[odra::event]
pub struct RewardsClaimed {
    pub holder: Address,
    pub amount: U256,
}

// ============ MOCK NFT EVENTS ============

/// Emitted when a new OneNFT is minted
#[odra::event]
pub struct TokenMinted {
    pub owner: Address,
    pub token_id: u64,
}

/// Emitted when a OneNFT changes owner
#[odra::event]
pub struct TokenTransferred {
    pub from: Address,
    pub to: Address,
    pub token_id: u64,
}
