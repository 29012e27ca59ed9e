//! MockNft behavior tests
//!
//! The claim contract trusts the NFT contract's id numbering and ownership
//! records, so the mock has to get those right.

mod test_utils;

use odra::prelude::*;

use one_nft_claim::errors::Error;
use one_nft_claim::events::{TokenMinted, TokenTransferred};

use test_utils::*;

#[test]
fn test_create_token_assigns_dense_one_based_ids() {
    let (env, _claim_contract, mut mock_nft, _two_token, deployer, _holder_a, _holder_b) = setup();

    env.set_caller(deployer);
    assert_eq!(mock_nft.token_ids(), 0);

    let first = mock_nft.create_token();
    let second = mock_nft.create_token();
    let third = mock_nft.create_token();

    assert_eq!(first, 1, "Ids are 1-based");
    assert_eq!(second, 2);
    assert_eq!(third, 3);
    assert_eq!(mock_nft.token_ids(), 3);
    assert_eq!(mock_nft.balance_of(deployer), 3);
    assert_eq!(mock_nft.owner_of(2), deployer);
}

#[test]
fn test_create_token_emits_event() {
    let (env, _claim_contract, mut mock_nft, _two_token, deployer, _holder_a, _holder_b) = setup();

    env.set_caller(deployer);
    let token_id = mock_nft.create_token();

    let expected_event = TokenMinted {
        owner: deployer,
        token_id,
    };
    assert!(env.emitted_event(&mock_nft, expected_event));
}

#[test]
fn test_safe_transfer_from_moves_ownership() {
    let (env, _claim_contract, mut mock_nft, _two_token, deployer, holder_a, _holder_b) = setup();

    env.set_caller(deployer);
    let token_id = mock_nft.create_token();
    mock_nft.safe_transfer_from(deployer, holder_a, token_id);

    assert_eq!(mock_nft.owner_of(token_id), holder_a);
    assert_eq!(mock_nft.balance_of(deployer), 0);
    assert_eq!(mock_nft.balance_of(holder_a), 1);

    let expected_event = TokenTransferred {
        from: deployer,
        to: holder_a,
        token_id,
    };
    assert!(env.emitted_event(&mock_nft, expected_event));
}

#[test]
fn test_transfer_by_non_owner_reverts() {
    let (env, _claim_contract, mut mock_nft, _two_token, deployer, holder_a, holder_b) = setup();

    env.set_caller(deployer);
    let token_id = mock_nft.create_token();

    // Holder A neither owns the token nor is the stated sender
    env.set_caller(holder_a);
    let result = mock_nft.try_safe_transfer_from(deployer, holder_b, token_id);
    assert!(result.is_err());
    assert_eq!(result.unwrap_err(), Error::NotTokenOwner.into());

    // Stated sender mismatch also reverts even for the real owner
    env.set_caller(deployer);
    let result = mock_nft.try_safe_transfer_from(holder_a, holder_b, token_id);
    assert!(result.is_err());
    assert_eq!(result.unwrap_err(), Error::NotTokenOwner.into());
}

#[test]
fn test_owner_of_unminted_token_reverts() {
    let (env, _claim_contract, mock_nft, _two_token, deployer, _holder_a, _holder_b) = setup();

    env.set_caller(deployer);
    let result = mock_nft.try_owner_of(42);
    assert!(result.is_err());
    assert_eq!(result.unwrap_err(), Error::TokenNotFound.into());
}
