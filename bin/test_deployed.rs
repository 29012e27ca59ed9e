//! Smoke test for a deployed OneNFT claim stack
//!
//! Mints NFTs, deposits rewards and reads the resulting claimable balances
//! against live contracts.

use std::str::FromStr;

use odra::casper_types::U256;
use odra::host::HostRefLoader;
use odra::prelude::Address;
use one_nft_claim::{MockNft, MockTwoToken, OneNftClaim};

fn main() {
    let env = odra_casper_livenet_env::env();
    let caller = env.caller();

    println!("=== Testing Deployed Contracts ===\n");
    println!("Caller: {}", caller.to_string());

    // Load deployed contracts - these will be set after fresh deployment
    let claim_address = std::env::var("CLAIM_ADDRESS").expect("CLAIM_ADDRESS env var must be set");
    let nft_address = std::env::var("ONE_NFT_ADDRESS").expect("ONE_NFT_ADDRESS env var must be set");
    let token_address =
        std::env::var("TWO_TOKEN_ADDRESS").expect("TWO_TOKEN_ADDRESS env var must be set");

    let claim_addr = Address::from_str(&claim_address).expect("Invalid OneNftClaim address");
    let nft_addr = Address::from_str(&nft_address).expect("Invalid MockNft address");
    let token_addr = Address::from_str(&token_address).expect("Invalid MockTwoToken address");

    println!("OneNftClaim: {}", claim_address);
    println!("MockNft: {}", nft_address);
    println!("MockTwoToken: {}", token_address);

    // Load contracts
    let mut claim_contract = OneNftClaim::load(&env, claim_addr);
    let mut mock_nft = MockNft::load(&env, nft_addr);
    let mut two_token = MockTwoToken::load(&env, token_addr);

    // Test 1: Read basic view functions
    println!("\n--- Test 1: View Functions ---");

    let minted = mock_nft.token_ids();
    println!("NFTs minted: {}", minted);

    let pool = claim_contract.get_reward_pool();
    println!("Reward pool: {:?}", pool);

    let my_claimable = claim_contract.address_to_two_token_can_claim(caller);
    println!("My claimable balance: {:?}", my_claimable);

    // Test 2: Mint two NFTs to the caller
    println!("\n--- Test 2: Minting 2 OneNFTs ---");
    env.set_gas(10_000_000_000u64); // 10 CSPR gas

    let first_id = mock_nft.create_token();
    println!("Minted token id: {}", first_id);
    let second_id = mock_nft.create_token();
    println!("Minted token id: {}", second_id);

    println!("NFTs minted now: {}", mock_nft.token_ids());

    // Test 3: Deposit 1000 TwoToken and check the allocation
    println!("\n--- Test 3: Depositing 1000 TwoToken ---");
    env.set_gas(15_000_000_000u64); // 15 CSPR gas

    let deposit_amount = U256::from(1000u64);
    two_token.approve(claim_addr, deposit_amount);
    println!("Approved: {:?}", deposit_amount);

    claim_contract.deposit_rewards(deposit_amount);
    println!("SUCCESS! Deposit distributed");

    let claimable_after = claim_contract.address_to_two_token_can_claim(caller);
    println!("My claimable balance now: {:?}", claimable_after);

    let pool_after = claim_contract.get_reward_pool();
    println!("Reward pool now: {:?}", pool_after);

    println!("\n=== All Tests Passed! ===");
}
