//! Deploy OneNftClaim only - uses existing OneNFT and TwoToken contracts
//!
//! Run with: cargo run --bin deploy_claim --features livenet --release
//!
//! Collaborator addresses resolve in order: production constants when
//! CLAIM_PROD=1, then ONE_NFT_ADDRESS / TWO_TOKEN_ADDRESS env overrides,
//! then the testnet defaults below.

use odra::host::Deployer;
use odra::prelude::{Address, Addressable};
use one_nft_claim::{DeployConfig, OneNftClaim, OneNftClaimInitArgs};

// Testnet deployments of the mock collaborators
const ONE_NFT_ADDRESS_TEST: &str =
    "hash-9f72611790b5200eea14373ed5bde8693b35790d9f72611790b5200eea14373e";
const TWO_TOKEN_ADDRESS_TEST: &str =
    "hash-8f69f8466e34dc47feeffb4dfae28ca4fa1ed85e8f69f8466e34dc47feeffb4d";

// Production addresses - fill in before a mainnet deployment
const ONE_NFT_ADDRESS: &str = "";
const TWO_TOKEN_ADDRESS: &str = "";

fn main() {
    // Load the Casper livenet environment
    let env = odra_casper_livenet_env::env();

    let config = DeployConfig::from_env();
    let deployer = config.signer(&env);
    println!("Network: {}", config.network);
    println!("Deployer address: {}", deployer.to_string());

    let (one_nft_override, two_token_override) = config.collaborator_addresses();

    let (one_nft, two_token) = if config.prod {
        (
            Address::new(ONE_NFT_ADDRESS).expect("Production OneNFT address not set"),
            Address::new(TWO_TOKEN_ADDRESS).expect("Production TwoToken address not set"),
        )
    } else {
        (
            one_nft_override.unwrap_or_else(|| {
                Address::new(ONE_NFT_ADDRESS_TEST).expect("Invalid OneNFT test address")
            }),
            two_token_override.unwrap_or_else(|| {
                Address::new(TWO_TOKEN_ADDRESS_TEST).expect("Invalid TwoToken test address")
            }),
        )
    };

    println!("OneNFT: {}", one_nft.to_string());
    println!("TwoToken: {}", two_token.to_string());

    // Deploy OneNftClaim
    println!("\n=== Deploying OneNftClaim ===");
    env.set_gas(200_000_000_000u64); // 200 CSPR gas

    let claim_init_args = OneNftClaimInitArgs { one_nft, two_token };

    let claim_contract = OneNftClaim::deploy(&env, claim_init_args);
    let claim_address = claim_contract.address();
    println!("OneNftClaim deployed at: {}", claim_address.to_string());

    if config.verify_source() {
        println!("Publish the contract source for verification on this network");
    }

    println!("\nDeployment complete!");
}
