//! Error definitions for the OneNFT claim system

use odra::prelude::*;

/// OneNFT claim errors
#[odra::odra_error]
pub enum Error {
    /// Amount must be greater than zero
    AmountMustBePositive = 1,
    /// No OneNFTs have been minted yet, nothing to allocate over
    NoNftsMinted = 2,
    /// Chunk indices are empty or outside the minted token id range
    InvalidChunkRange = 3,
    /// Caller has no rewards to claim. If the caller holds a OneNFT,
    /// they should wait until the next reward deposit.
    NothingToClaim = 4,
    /// Token id has not been minted
    TokenNotFound = 5,
    /// Caller does not own the token being transferred
    NotTokenOwner = 6,
    /// OneNFT contract address not set
    NftNotSet = 7,
    /// TwoToken contract address not set
    TokenNotSet = 8,
}
