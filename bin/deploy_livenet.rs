//! Livenet deployment script for the full OneNFT claim stack
//!
//! Deploys MockTwoToken, MockNft and OneNftClaim to a Casper network.
//! Intended for local chains and testnets; on production networks use
//! `deploy_claim` against the real OneNFT and TwoToken contracts.

use odra::host::{Deployer, NoArgs};
use odra::prelude::Addressable;
use one_nft_claim::{DeployConfig, MockNft, MockTwoToken, OneNftClaim, OneNftClaimInitArgs};

fn main() {
    // Load the Casper livenet environment
    let env = odra_casper_livenet_env::env();

    let config = DeployConfig::from_env();
    let deployer = config.signer(&env);
    println!("Network: {}", config.network);
    println!("Deployer address: {}", deployer.to_string());
    if config.verify_source() {
        println!("Source verification recognized for this network");
    }

    // Step 1: Deploy MockTwoToken (initial supply goes to the deployer)
    println!("\n=== Deploying MockTwoToken ===");
    env.set_gas(300_000_000_000u64); // 300 CSPR gas (CEP-18 needs more)

    let two_token = MockTwoToken::deploy(&env, NoArgs);
    let two_token_address = two_token.address();
    println!("MockTwoToken deployed at: {}", two_token_address.to_string());

    // Step 2: Deploy MockNft
    println!("\n=== Deploying MockNft ===");
    env.set_gas(200_000_000_000u64); // 200 CSPR gas

    let mock_nft = MockNft::deploy(&env, NoArgs);
    let mock_nft_address = mock_nft.address();
    println!("MockNft deployed at: {}", mock_nft_address.to_string());

    // Step 3: Deploy OneNftClaim wired to both mocks
    println!("\n=== Deploying OneNftClaim ===");
    env.set_gas(200_000_000_000u64); // 200 CSPR gas

    let claim_init_args = OneNftClaimInitArgs {
        one_nft: mock_nft_address,
        two_token: two_token_address,
    };

    let claim_contract = OneNftClaim::deploy(&env, claim_init_args);
    let claim_address = claim_contract.address();
    println!("OneNftClaim deployed at: {}", claim_address.to_string());

    // Summary
    println!("\n=== Deployment Summary ===");
    println!("MockTwoToken: {}", two_token_address.to_string());
    println!("MockNft: {}", mock_nft_address.to_string());
    println!("OneNftClaim: {}", claim_address.to_string());
    println!("Deployer: {}", deployer.to_string());
    println!("\nDeployment complete!");
}
