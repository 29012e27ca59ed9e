//! OneNFT Claim - Proportional reward distribution for Casper Network
//!
//! This crate lets OneNFT holders earn fungible TwoToken rewards:
//! - A depositor funds the claim contract with TwoToken
//! - Each holder is credited in proportion to the NFTs they hold
//! - Holders withdraw their full claimable balance on demand
//! - Large holder sets can be funded in index-range chunks to bound per-call work

#![no_std]

extern crate alloc;

#[cfg(not(target_arch = "wasm32"))]
extern crate std;

#[cfg(not(target_arch = "wasm32"))]
pub mod deploy_config;
pub mod errors;
pub mod events;
pub mod mock_nft;
pub mod mock_two_token;
pub mod nft_interface;
pub mod one_nft_claim;
pub mod token_interface;

// Re-export main types for external use
pub use errors::*;
pub use events::*;
pub use mock_nft::MockNft;
pub use mock_two_token::MockTwoToken;
pub use one_nft_claim::OneNftClaim;

// Re-export generated types only when not building for wasm32 target
#[cfg(not(target_arch = "wasm32"))]
pub use deploy_config::DeployConfig;
#[cfg(not(target_arch = "wasm32"))]
pub use mock_nft::MockNftHostRef;
#[cfg(not(target_arch = "wasm32"))]
pub use mock_two_token::MockTwoTokenHostRef;
#[cfg(not(target_arch = "wasm32"))]
pub use one_nft_claim::{OneNftClaimHostRef, OneNftClaimInitArgs};
