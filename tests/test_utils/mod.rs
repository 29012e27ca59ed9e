//! Test utilities and helpers for OneNFT claim tests

use odra::casper_types::U256;
use odra::host::{Deployer, HostEnv, HostRef, NoArgs};
use odra::prelude::*;

use one_nft_claim::mock_nft::{MockNft, MockNftHostRef};
use one_nft_claim::mock_two_token::{MockTwoToken, MockTwoTokenHostRef};
use one_nft_claim::one_nft_claim::{OneNftClaim, OneNftClaimHostRef, OneNftClaimInitArgs};

/// Holder counts and deposit amount from the reference scenario:
/// 15 NFTs to holder A, 5 to holder B, deposit 1000 -> 750 / 250
pub const HOLDER_A_NFTS: u64 = 15;
pub const HOLDER_B_NFTS: u64 = 5;
pub const TOTAL_NFTS: u64 = HOLDER_A_NFTS + HOLDER_B_NFTS;
pub const DEPOSIT_AMOUNT: u64 = 1000;

/// Deploy the full stack: MockTwoToken, MockNft, OneNftClaim wired to both
///
/// Returns (env, claim, nft, token, deployer, holder_a, holder_b).
/// The deployer (account 0) holds the entire TwoToken supply.
pub fn setup() -> (
    HostEnv,
    OneNftClaimHostRef,
    MockNftHostRef,
    MockTwoTokenHostRef,
    Address,
    Address,
    Address,
) {
    let env = odra_test::env();

    let deployer = env.get_account(0);
    let holder_a = env.get_account(1);
    let holder_b = env.get_account(2);

    env.set_caller(deployer);
    let two_token = MockTwoToken::deploy(&env, NoArgs);
    let mock_nft = MockNft::deploy(&env, NoArgs);

    let claim_contract = OneNftClaim::deploy(
        &env,
        OneNftClaimInitArgs {
            one_nft: mock_nft.address(),
            two_token: two_token.address(),
        },
    );

    (
        env,
        claim_contract,
        mock_nft,
        two_token,
        deployer,
        holder_a,
        holder_b,
    )
}

/// Mint `count` NFTs as `deployer` and hand each one to `holder`
///
/// Mints land in the deployer's account first, then move to the holder
/// via `safe_transfer_from`, the way a sale distribution would.
pub fn mint_nfts_to(
    env: &HostEnv,
    mock_nft: &mut MockNftHostRef,
    deployer: Address,
    holder: Address,
    count: u64,
) {
    for _ in 0..count {
        env.set_caller(deployer);
        let token_id = mock_nft.create_token();
        mock_nft.safe_transfer_from(deployer, holder, token_id);
    }
}

/// Approve the claim contract and deposit in one step, as the depositor
pub fn approve_and_deposit(
    env: &HostEnv,
    claim_contract: &mut OneNftClaimHostRef,
    two_token: &mut MockTwoTokenHostRef,
    depositor: Address,
    amount: u64,
) {
    env.set_caller(depositor);
    two_token.approve(claim_contract.address(), U256::from(amount));
    claim_contract.deposit_rewards(U256::from(amount));
}

/// Set up the reference scenario: 15 NFTs to holder A, 5 to holder B
pub fn setup_with_holders() -> (
    HostEnv,
    OneNftClaimHostRef,
    MockNftHostRef,
    MockTwoTokenHostRef,
    Address,
    Address,
    Address,
) {
    let (env, claim_contract, mut mock_nft, two_token, deployer, holder_a, holder_b) = setup();

    mint_nfts_to(&env, &mut mock_nft, deployer, holder_a, HOLDER_A_NFTS);
    mint_nfts_to(&env, &mut mock_nft, deployer, holder_b, HOLDER_B_NFTS);

    (
        env,
        claim_contract,
        mock_nft,
        two_token,
        deployer,
        holder_a,
        holder_b,
    )
}
